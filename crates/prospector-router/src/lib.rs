//! Prospector Router
//!
//! HTTP front end for search jobs: submit criteria, poll status, browse
//! history and download results. Each job runs on the blocking pool against
//! the configured job store.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RouterConfig;
use handlers::{create_router, AppState};
use prospector_pipeline::JobRunner;
use prospector_store::{open_store, StoreError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Job store could not be opened
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state for a configuration
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    Ok(AppState {
        store: open_store(&config.store)?,
        runner: Arc::new(JobRunner::new(config.pipeline.clone())),
        fetch: Arc::new(config.fetch.clone()),
    })
}

/// Start the Router HTTP server
///
/// Opens the job store, builds the router and serves until shut down.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    // Initialize tracing; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    info!("Starting Prospector Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Store: {:?}", config.store);
    info!("Offline: {}", config.pipeline.offline);

    let state = build_state(&config)?;
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
