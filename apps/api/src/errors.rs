use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The generation service rejected our credential. Fatal for the whole request.
    #[error("Upstream rejected credential: {0}")]
    UpstreamUnauthorized(String),

    #[error("Learning path generation is disabled")]
    GenerationDisabled,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UpstreamUnauthorized(msg) => {
                tracing::error!("Generation service rejected credential: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_AUTH_ERROR",
                    "Unauthorized: invalid Hugging Face API key".to_string(),
                )
            }
            AppError::GenerationDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "GENERATION_DISABLED",
                "Learning path generation is not enabled on this deployment".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
