use std::sync::Arc;

use crate::careers::MatchScorer;
use crate::learning_path::gateway::PathGateway;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable career scorer. Default: SkillOverlapScorer over the built-in catalog.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// `None` when ENABLE_PATH_GENERATION=false.
    pub path_gateway: Option<Arc<PathGateway>>,
    pub sessions: SessionStore,
}
