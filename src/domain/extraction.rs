/// Result of pulling text out of a PDF document.
///
/// `page_count` counts every page of the document, including pages
/// that yielded no extractable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub page_count: usize,
}

impl Extraction {
    pub fn from_pages(pages: Vec<String>) -> Self {
        let page_count = pages.len();
        Self {
            text: join_pages(&pages),
            page_count,
        }
    }
}

/// Joins per-page text in page order with newline separators.
/// A page with no text contributes an empty segment.
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
