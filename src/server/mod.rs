//! HTTP server for the contacts API.
//!
//! This module provides the axum router and the serve loop that exposes
//! the contact service over REST.

pub mod handlers;

pub use handlers::{build_router, AppState};

use anyhow::Result;
use tracing::info;

/// Run the HTTP server until shutdown.
///
/// Binds the given address, serves the contact API router, and exits
/// cleanly on ctrl-c.
///
/// # Arguments
/// * `bind_addr` - Address to listen on, e.g. `127.0.0.1:3001`
/// * `state` - Application state holding the contact service
///
/// # Returns
/// An error if the listener cannot bind or the server fails while running
pub async fn run_server(bind_addr: &str, state: AppState) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // A failure to install the handler is treated the same as a signal
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
