use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::Extraction;

/// Sequential per-page text extraction. No OCR, no layout
/// preservation; a page whose content cannot be decoded contributes
/// an empty string but still counts toward the page total.
#[derive(Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, TextExtractorError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| TextExtractorError::ParseFailed(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        let pages = page_numbers
            .iter()
            .map(|page| doc.extract_text(&[*page]).unwrap_or_default())
            .collect();

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for LopdfExtractor {
    async fn extract(&self, data: &[u8]) -> Result<Extraction, TextExtractorError> {
        let data = data.to_vec();

        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&data))
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(Extraction::from_pages(pages))
    }
}
