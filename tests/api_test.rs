use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use brevis::application::ports::{BlobStore, LlmClient, TextExtractor, TextExtractorError};
use brevis::application::services::{Summarizer, SummaryPipeline};
use brevis::domain::Extraction;
use brevis::infrastructure::llm::MockLlmClient;
use brevis::infrastructure::storage::MockBlobStore;
use brevis::presentation::config::{
    BucketSettings, LlmSettings, ServerSettings, Settings, StorageProviderSetting, StorageSettings,
};
use brevis::presentation::{AppState, create_router};

struct StubExtractor;

#[async_trait::async_trait]
impl TextExtractor for StubExtractor {
    async fn extract(&self, _data: &[u8]) -> Result<Extraction, TextExtractorError> {
        Ok(Extraction::from_pages(vec![
            "Hello".to_string(),
            "World".to_string(),
        ]))
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings { port: 0 },
        storage: StorageSettings {
            provider: StorageProviderSetting::Local,
            local_root: "./data".to_string(),
            gcs_service_account_key: None,
        },
        buckets: BucketSettings {
            source_bucket: "pdf_summarize".to_string(),
            source_prefix: "pdfs/".to_string(),
            destination_bucket: "pdf_summarize_results".to_string(),
            destination_prefix: "summaries/".to_string(),
        },
        llm: LlmSettings {
            api_key: "test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        },
    }
}

fn create_test_app() -> (Arc<MockBlobStore>, Arc<MockBlobStore>, axum::Router) {
    let source = Arc::new(MockBlobStore::new());
    let destination = Arc::new(MockBlobStore::new());

    let pipeline = Arc::new(SummaryPipeline::new(
        Arc::clone(&source) as Arc<dyn BlobStore>,
        Arc::clone(&destination) as Arc<dyn BlobStore>,
        Arc::new(StubExtractor),
        Summarizer::new(Arc::new(MockLlmClient) as Arc<dyn LlmClient>),
        "pdfs/".to_string(),
        "summaries/".to_string(),
    ));

    let state = AppState {
        pipeline,
        settings: test_settings(),
    };

    (source, destination, create_router(state))
}

fn event_request(bucket: &str, name: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(format!(
            r#"{{"bucket": "{bucket}", "name": "{name}"}}"#
        )))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let (_source, _destination, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_new_pdf_notification_when_handled_then_returns_completion_message() {
    let (source, destination, app) = create_test_app();
    source.insert("pdfs/report.pdf", b"%PDF-stub");

    let response = app
        .oneshot(event_request("pdf_summarize", "pdfs/report.pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "summary complete");

    assert_eq!(
        destination.get("summaries/report_summary.md"),
        Some(b"Mock summary".to_vec())
    );
}

#[tokio::test]
async fn given_non_pdf_notification_when_handled_then_skipped_without_error() {
    let (_source, destination, app) = create_test_app();

    let response = app
        .oneshot(event_request("pdf_summarize", "pdfs/notes.txt"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("skipped"));
    assert_eq!(destination.object_count(), 0);
}

#[tokio::test]
async fn given_notification_for_other_bucket_when_handled_then_skipped() {
    let (_source, destination, app) = create_test_app();

    let response = app
        .oneshot(event_request("some_other_bucket", "pdfs/report.pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("skipped"));
    assert_eq!(destination.object_count(), 0);
}

#[tokio::test]
async fn given_pipeline_failure_when_handled_then_error_propagates_as_500() {
    let (source, destination, app) = create_test_app();
    source.insert("pdfs/report.pdf", b"%PDF-stub");
    source.poison_fetch("pdfs/report.pdf");

    let response = app
        .oneshot(event_request("pdf_summarize", "pdfs/report.pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(destination.object_count(), 0);
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let (_source, _destination, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let (_source, _destination, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
