use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    BlobStore, BlobStoreError, LlmClientError, TextExtractor, TextExtractorError,
};
use crate::domain::{ProcessingOutcome, RunReport, SUMMARY_CONTENT_TYPE, SourceObject};

use super::Summarizer;

/// Runs the per-document pipeline: fetch, extract, summarize, upload.
/// Shared by the batch binary and the event-triggered handler; only
/// the trigger wiring differs between the two.
pub struct SummaryPipeline {
    source: Arc<dyn BlobStore>,
    destination: Arc<dyn BlobStore>,
    extractor: Arc<dyn TextExtractor>,
    summarizer: Summarizer,
    source_prefix: String,
    destination_prefix: String,
}

impl SummaryPipeline {
    pub fn new(
        source: Arc<dyn BlobStore>,
        destination: Arc<dyn BlobStore>,
        extractor: Arc<dyn TextExtractor>,
        summarizer: Summarizer,
        source_prefix: String,
        destination_prefix: String,
    ) -> Self {
        Self {
            source,
            destination,
            extractor,
            summarizer,
            source_prefix,
            destination_prefix,
        }
    }

    /// Processes a single source object end to end and returns the
    /// destination object name. Errors propagate to the caller; the
    /// batch loop turns them into outcomes, the event handler turns
    /// them into a failed invocation.
    #[tracing::instrument(skip(self))]
    pub async fn process_object(&self, name: &str) -> Result<String, PipelineError> {
        let object = SourceObject::new(name);

        let data = self.source.fetch(name).await?;
        tracing::info!(object = %object, bytes = data.len(), "Extracting file");

        let extraction = self.extractor.extract(&data).await?;
        tracing::info!(
            object = %object,
            page_count = extraction.page_count,
            "Text extraction complete"
        );

        let summary = self.summarizer.summarize(&extraction).await?;

        let destination_name = object.summary_object_name(&self.destination_prefix);
        self.destination
            .put(&destination_name, Bytes::from(summary), SUMMARY_CONTENT_TYPE)
            .await?;

        tracing::info!(
            object = %object,
            destination = %destination_name,
            "Summary uploaded"
        );

        Ok(destination_name)
    }

    /// Lists pending PDFs under the source prefix and processes each
    /// one independently. A failure on one object is recorded and the
    /// run continues with the next; only a failure to list at all
    /// aborts the run.
    pub async fn run_batch(&self) -> Result<RunReport, PipelineError> {
        let names = self.source.list(&self.source_prefix).await?;
        let pdf_names: Vec<String> = names
            .into_iter()
            .filter(|n| SourceObject::is_pdf(n))
            .collect();

        let mut report = RunReport::default();

        if pdf_names.is_empty() {
            tracing::info!(prefix = %self.source_prefix, "No PDF files found");
            return Ok(report);
        }

        for name in pdf_names {
            match self.process_object(&name).await {
                Ok(destination) => {
                    report.push(ProcessingOutcome::Summarized {
                        object: name,
                        destination,
                    });
                }
                Err(e) => {
                    tracing::error!(object = %name, error = %e, "Failed to process object");
                    report.push(ProcessingOutcome::Failed {
                        object: name,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("summarization: {0}")]
    Summarization(#[from] LlmClientError),
}
