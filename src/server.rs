//! HTTP surface for the execution service
//!
//! Deliberately thin: deserialize the request, call the service, serialize
//! the result. Validation rejections map to 400; everything else the service
//! already folded into an `ExecutionResult` payload.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::service::{ExecutionRequest, ExecutionService};

pub fn router(service: Arc<ExecutionService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/execute", post(execute))
        .with_state(service)
}

async fn health() -> &'static str {
    "ok"
}

async fn execute(
    State(service): State<Arc<ExecutionService>>,
    Json(request): Json<ExecutionRequest>,
) -> Response {
    match service.execute(&request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
