//! Linkmap - internal link graph explorer.
//!
//! This is the main entry point for the linkmap web server. Upload a CSV
//! export of a site's internal links and explore it as a dashboard, a
//! per-page flow diagram, and an interactive network map.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use linkmap::{handlers, AppState, ADDR_ENV, DEFAULT_ADDR};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkmap=info")),
        )
        .init();

    let state = Arc::new(AppState::new());

    let app = Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload))
        .route("/network", get(handlers::network))
        .route("/flow", get(handlers::flow))
        .route("/data", get(handlers::data))
        // Renderer APIs
        .route("/api/graph", get(handlers::api_graph))
        .route("/api/graph/click", post(handlers::api_click))
        .route("/api/flow", get(handlers::api_flow))
        .with_state(state);

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    tracing::info!(%addr, "linkmap server running");
    axum::serve(listener, app).await.expect("Server error");
}
