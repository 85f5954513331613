use std::fmt;

const PDF_EXTENSION: &str = ".pdf";
const SUMMARY_SUFFIX: &str = "_summary.md";

/// Content type declared when uploading a summary artifact.
pub const SUMMARY_CONTENT_TYPE: &str = "text/markdown";

/// Name of an object in the source bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceObject(String);

impl SourceObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Case-insensitive `.pdf` suffix match.
    pub fn is_pdf(name: &str) -> bool {
        name.to_ascii_lowercase().ends_with(PDF_EXTENSION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment with the `.pdf` extension stripped.
    pub fn base_name(&self) -> &str {
        let file = self.0.rsplit('/').next().unwrap_or(&self.0);
        if Self::is_pdf(file) {
            // the suffix is ASCII, so this slice stays on a char boundary
            &file[..file.len() - PDF_EXTENSION.len()]
        } else {
            file
        }
    }

    /// Deterministic destination name for the summary artifact.
    /// Re-running the pipeline overwrites the object at this name.
    pub fn summary_object_name(&self, destination_prefix: &str) -> String {
        format!("{destination_prefix}{}{SUMMARY_SUFFIX}", self.base_name())
    }
}

impl fmt::Display for SourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
