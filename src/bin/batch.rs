use std::sync::Arc;

use brevis::application::services::{Summarizer, SummaryPipeline};
use brevis::domain::ProcessingOutcome;
use brevis::infrastructure::llm::GeminiClient;
use brevis::infrastructure::observability::{TracingConfig, init_tracing};
use brevis::infrastructure::pdf::LopdfExtractor;
use brevis::infrastructure::storage::BlobStoreFactory;
use brevis::presentation::Settings;

/// One-shot batch run: summarize every PDF currently under the source
/// prefix. Per-object failures are logged and reported; the process
/// always exits 0.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(&TracingConfig::default());

    let source = BlobStoreFactory::create(&settings.storage, &settings.buckets.source_bucket)?;
    let destination =
        BlobStoreFactory::create(&settings.storage, &settings.buckets.destination_bucket)?;
    let extractor = Arc::new(LopdfExtractor::new());
    let llm_client = Arc::new(GeminiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));

    let pipeline = SummaryPipeline::new(
        source,
        destination,
        extractor,
        Summarizer::new(llm_client),
        settings.buckets.source_prefix.clone(),
        settings.buckets.destination_prefix.clone(),
    );

    match pipeline.run_batch().await {
        Ok(report) => {
            for outcome in report.outcomes() {
                if let ProcessingOutcome::Summarized {
                    object,
                    destination,
                } = outcome
                {
                    tracing::info!(
                        object = %object,
                        location = %format!(
                            "gs://{}/{}",
                            settings.buckets.destination_bucket, destination
                        ),
                        "Summary written"
                    );
                }
            }
            tracing::info!(
                summarized = report.summarized(),
                failed = report.failed(),
                "Batch run complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Batch run aborted");
        }
    }

    Ok(())
}
