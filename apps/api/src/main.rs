mod careers;
mod config;
mod errors;
mod learning_path;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::careers::SkillOverlapScorer;
use crate::config::Config;
use crate::learning_path::gateway::PathGateway;
use crate::llm_client::HfInferenceClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key when generation is enabled)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize career scorer
    let match_scorer = Arc::new(SkillOverlapScorer::default());

    // Initialize learning path gateway
    let path_gateway = match (&config.hf_api_key, config.enable_path_generation) {
        (Some(api_key), true) => {
            let client = HfInferenceClient::new(api_key.clone(), config.hf_api_url.clone())
                .context("Failed to build inference HTTP client")?;
            let gateway = PathGateway::new(Arc::new(client));
            info!(
                "Learning path gateway initialized ({} candidate models at {})",
                gateway.models().len(),
                config.hf_api_url
            );
            Some(Arc::new(gateway))
        }
        _ => {
            warn!("Learning path generation disabled");
            None
        }
    };

    let state = AppState {
        match_scorer,
        path_gateway,
        sessions: SessionStore::new(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
