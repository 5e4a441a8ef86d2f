//! HTTP server for the blog.
//!
//! Serves the public pages, the bus arrivals page and the bundled
//! stylesheet. Posts are loaded once at startup and shared read only
//! across requests.
//!
//! ```text
//! Browser ──HTTP──► axum router
//!                     ├─► page handlers ──► PostStore ──► MarkdownRenderer ──► maud pages
//!                     └─► /secret/ ──► spawn_blocking ──► transit report ──► Bus Time API
//! ```

mod app;
mod error;
mod handlers;
mod state;

pub use app::create_router;
pub use error::ServerError;
pub use state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::store::load_dir;

/// Runs the server until Ctrl-C.
///
/// # Errors
///
/// Returns error if configuration is invalid, posts fail to load, or the
/// listener cannot bind.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate()?;
    let addr = config.addr()?;

    let posts = load_dir(&config.posts)?;
    if !config.transit.has_api_key() {
        tracing::warn!("MTA_API_KEY is not set, the bus page will show setup instructions");
    }
    let state = Arc::new(AppState::from_config(&config, posts));

    let app = create_router(state);

    tracing::info!(address = %addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
