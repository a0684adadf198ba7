use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Message returned when the upstream model call fails. The cause stays in the logs.
pub const GENERATION_FAILED: &str = "Failed to generate response";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILED.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
