// SPDX-License-Identifier: MIT

//! Hueboard API Server
//!
//! Serves the authenticated mutation API for colors, designs, and posts.
//! Accounts sign up and sign in here; every other route requires the
//! bearer token those two hand out.

use hueboard::{
    config::Config,
    db::{MemoryStore, Store},
    services::{AccountDirectory, CredentialService, MutationService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Hueboard API");

    // In-memory store: records do not survive a restart.
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    tracing::info!("In-memory store initialized");

    let credentials = CredentialService::new(config.access_token_secret.clone());
    let accounts = AccountDirectory::new(store.clone());
    let mutations = MutationService::new(store.clone(), accounts, credentials.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        credentials,
        mutations,
    });

    // Build router
    let app = hueboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hueboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
