//! Contacts API server - Main entry point
//!
//! Wires the in-memory store into the contact service and serves the REST
//! API until shutdown.

use anyhow::Result;
use contacts_api::repositories::{ContactStore, MemoryContactStore};
use contacts_api::server::{run_server, AppState};
use contacts_api::services::{ContactService, ContactServiceImpl};
use contacts_api::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; the log level default comes from it
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging, RUST_LOG winning over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Initialize the store with explicit dependency injection; no global
    // service instance exists anywhere in the crate
    let store: Arc<dyn ContactStore> = if config.seed_demo_data {
        info!("Seeding reference contacts");
        Arc::new(MemoryContactStore::with_seed_data())
    } else {
        Arc::new(MemoryContactStore::new())
    };

    let service = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;
    let state = AppState::new(service);

    info!("Starting contacts API server on {}", config.bind_addr);

    if let Err(e) = run_server(&config.bind_addr, state).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Contacts API server shutdown complete");
    Ok(())
}
