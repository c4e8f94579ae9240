use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use mindmap_datastore::{is_valid_request_id, StatusStore};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{
    llm::TextGenerator, processor::JobError, types::JobRequest, yt::TranscriptFetcher,
    NotesProcessor,
};

const SUCCESS_MESSAGE: &str = "Mindmap generated successfully";

/// HTTP routes of the notes service.
///
/// * `POST /process` runs a job to completion within the request
/// * `GET /requests/{request_id}` reads the job record back from the status store
/// * `GET /health` liveness probe
pub fn router<D, F, G>(processor: Arc<NotesProcessor<D, F, G>>) -> Router
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/process", post(process_job::<D, F, G>))
        .route("/requests/{request_id}", get(job_status::<D, F, G>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(processor)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

async fn process_job<D, F, G>(
    State(processor): State<Arc<NotesProcessor<D, F, G>>>,
    payload: Result<Json<JobRequest>, JsonRejection>,
) -> Response
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected malformed job request");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    if !is_valid_request_id(&request.request_id) {
        tracing::warn!(request_id = %request.request_id, "Rejected job request with invalid id");
        return error_response(StatusCode::BAD_REQUEST, "Invalid request id");
    }

    match processor.process(&request).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "success", "message": SUCCESS_MESSAGE })),
        )
            .into_response(),
        Err(e @ (JobError::StatusStore(_) | JobError::InvalidTransition { .. })) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

async fn job_status<D, F, G>(
    State(processor): State<Arc<NotesProcessor<D, F, G>>>,
    Path(request_id): Path<String>,
) -> Response
where
    D: StatusStore + Send + Sync + 'static,
    F: TranscriptFetcher + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    if !is_valid_request_id(&request_id) {
        return error_response(StatusCode::BAD_REQUEST, "Invalid request id");
    }

    match processor.store().fetch_status(&request_id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Unknown request id"),
        Err(e) => {
            tracing::error!(error = ?e, %request_id, "Failed to fetch job status");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch job status")
        }
    }
}

async fn health() -> &'static str {
    "ok"
}
