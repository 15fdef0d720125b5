//! Axum route handlers for the Careers API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::careers::catalog::{career_catalog, CatalogEntry};
use crate::careers::CareerMatch;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<CareerMatch>,
}

/// GET /api/careers
pub async fn handle_list_careers() -> Json<&'static [CatalogEntry]> {
    Json(career_catalog())
}

/// POST /api/careers/match
///
/// Stateless ranking: scores the posted profile without touching any session.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<MatchResponse>, AppError> {
    profile.validate()?;

    let matches = state.match_scorer.rank(&profile);
    if let Some(top) = matches.first() {
        info!("Ranked {} careers, top: {} ({:.2})", matches.len(), top.title, top.match_score);
    }

    Ok(Json(MatchResponse { matches }))
}
