//! Auction House - A lightweight auction server
//!
//! Auctions stay active for a configured duration and are closed
//! automatically by a background sweep task once they expire.

mod api;
mod auction;
mod config;
mod error;
mod models;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use auction::AuctionRepository;
use config::Config;
use store::{AuctionStore, InMemoryStore};

/// Main entry point for the auction server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the auction store
/// 4. Start the repository (recovers active auctions, spawns the sweeper)
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auction_house=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Auction House Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: auction_duration={}s, sweep_interval={}s, port={}",
        config.auction_duration_secs, config.sweep_interval_secs, config.server_port
    );

    // Create the store and start the repository (recovery + sweeper)
    let store: Arc<dyn AuctionStore> = Arc::new(InMemoryStore::new());
    let repository = Arc::new(
        AuctionRepository::start(store, &config)
            .await
            .context("Failed to start auction repository")?,
    );
    info!("Auction repository started");

    // Create router with all endpoints
    let state = AppState::new(repository.clone());
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(repository))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, stops the background sweeper and allows graceful
/// shutdown. Auctions still tracked at this point stay Active in the
/// store; a replacement instance recovers them at startup.
async fn shutdown_signal(repository: Arc<AuctionRepository>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Stop the sweep task
    repository.shutdown();
    warn!("Sweep task stopped");
}
