use async_trait::async_trait;

use crate::domain::Extraction;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Pulls per-page text out of a PDF document. Pages without
    /// extractable text degrade to an empty string; a document that
    /// cannot be parsed at all is an error.
    async fn extract(&self, data: &[u8]) -> Result<Extraction, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("failed to parse PDF: {0}")]
    ParseFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
