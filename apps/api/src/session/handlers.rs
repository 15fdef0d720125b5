use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::session::Session;
use crate::state::AppState;

/// POST /api/sessions
///
/// An empty body starts from the questionnaire's starter profile. Any other body must
/// be a valid profile.
pub async fn handle_create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let profile = if body.iter().all(u8::is_ascii_whitespace) {
        UserProfile::starter()
    } else {
        serde_json::from_slice::<UserProfile>(&body)
            .map_err(|e| AppError::Validation(format!("invalid profile: {e}")))?
    };
    profile.validate()?;

    let session = state.sessions.create(profile).await;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// PUT /api/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<Session>, AppError> {
    profile.validate()?;
    Ok(Json(state.sessions.update_profile(id, profile).await?))
}

/// POST /api/sessions/:id/assessment
///
/// Ranks the session's current profile and stores the matches on it.
pub async fn handle_complete_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .assess(id, state.match_scorer.as_ref())
        .await?;
    Ok(Json(session))
}

/// DELETE /api/sessions/:id
pub async fn handle_discard_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.discard(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
