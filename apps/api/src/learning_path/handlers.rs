//! Axum route handlers for the Learning Path API.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::learning_path::{GeneratedPath, PathRequest};
use crate::state::AppState;

/// POST /api/generate-path
///
/// Body: `{"skills": [...], "interests": [...], "weaknesses": [...]}`.
/// Always answers with a plan unless the request is malformed or the
/// inference service rejects our credential.
pub async fn handle_generate_path(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GeneratedPath>, AppError> {
    let request = PathRequest::from_value(&body)?;
    let gateway = state
        .path_gateway
        .as_ref()
        .ok_or(AppError::GenerationDisabled)?;

    info!(
        "Learning path requested: {} skills, {} interests, {} weaknesses",
        request.skills.len(),
        request.interests.len(),
        request.weaknesses.len()
    );

    let path = gateway.generate_path(&request).await?;
    Ok(Json(path))
}
