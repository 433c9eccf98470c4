//! # Restaurant API server
//!
//! Starts the [`RestaurantSystem`], serves the HTTP API until Ctrl-C, then shuts the
//! actors down.

use restaurant_api::http;
use restaurant_api::lifecycle::{setup_tracing, RestaurantSystem, ServerConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;

    let system = RestaurantSystem::new(config.buffer);
    let app = http::app(system.state());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.addr))?;
    info!(addr = %config.addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
