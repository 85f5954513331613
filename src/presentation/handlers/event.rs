use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::SourceObject;
use crate::presentation::state::AppState;

/// Fixed string returned when an invocation summarizes its object.
pub const COMPLETION_MESSAGE: &str = "summary complete";

/// Storage-change notification payload: one new object per event.
#[derive(Debug, Deserialize)]
pub struct StorageEvent {
    pub bucket: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handles one notification. Non-PDF objects are skipped, not failed.
/// A pipeline error is returned to the invoking runtime, which owns
/// any retry behavior.
#[tracing::instrument(skip(state, event), fields(bucket = %event.bucket, object = %event.name))]
pub async fn event_handler(
    State(state): State<AppState>,
    Json(event): Json<StorageEvent>,
) -> impl IntoResponse {
    if event.bucket != state.settings.buckets.source_bucket {
        tracing::warn!("Notification for a bucket this service is not watching, skipping");
        return (
            StatusCode::OK,
            Json(EventResponse {
                message: format!("skipped {}: unexpected bucket {}", event.name, event.bucket),
            }),
        )
            .into_response();
    }

    if !SourceObject::is_pdf(&event.name) {
        tracing::info!("Object is not a PDF, skipping");
        return (
            StatusCode::OK,
            Json(EventResponse {
                message: format!("skipped {}: not a PDF", event.name),
            }),
        )
            .into_response();
    }

    match state.pipeline.process_object(&event.name).await {
        Ok(destination) => {
            tracing::info!(destination = %destination, "Notification processed");
            (
                StatusCode::OK,
                Json(EventResponse {
                    message: COMPLETION_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to process notification");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
