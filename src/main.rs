use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use brevis::application::services::{Summarizer, SummaryPipeline};
use brevis::infrastructure::llm::GeminiClient;
use brevis::infrastructure::observability::{TracingConfig, init_tracing};
use brevis::infrastructure::pdf::LopdfExtractor;
use brevis::infrastructure::storage::BlobStoreFactory;
use brevis::presentation::{AppState, Settings, create_router};

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

    let pipeline = Arc::new(SummaryPipeline::new(
        source,
        destination,
        extractor,
        Summarizer::new(llm_client),
        settings.buckets.source_prefix.clone(),
        settings.buckets.destination_prefix.clone(),
    ));

    let port = settings.server.port;
    let state = AppState { pipeline, settings };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
