pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::careers::handlers as careers;
use crate::learning_path::handlers as learning_path;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Careers API
        .route("/api/careers", get(careers::handle_list_careers))
        .route("/api/careers/match", post(careers::handle_match))
        // Sessions API
        .route("/api/sessions", post(session::handle_create_session))
        .route(
            "/api/sessions/:id",
            get(session::handle_get_session).delete(session::handle_discard_session),
        )
        .route(
            "/api/sessions/:id/profile",
            put(session::handle_update_profile),
        )
        .route(
            "/api/sessions/:id/assessment",
            post(session::handle_complete_assessment),
        )
        // Learning Path API
        .route(
            "/api/generate-path",
            post(learning_path::handle_generate_path),
        )
        .with_state(state)
}
