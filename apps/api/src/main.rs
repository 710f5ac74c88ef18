//! # Ledger API Server
//!
//! Startup: load configuration, open the database (applying the bootstrap
//! schema), build the router, serve until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use ledger_api::{app, ApiConfig, AppState};
use ledger_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting Ledger API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        port = config.http_port,
        database = %config.database_path,
        "Configuration loaded"
    );

    // Connect to the database and apply the bootstrap schema
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database ready");

    // Build the router around the shared state
    let addr = config.socket_addr();
    let state = Arc::new(AppState { db, config });
    let router = app(state);

    info!(%addr, "Starting HTTP server");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
