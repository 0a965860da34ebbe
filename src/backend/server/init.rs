/**
 * Server Initialization
 *
 * This module builds the Axum application and runs it.
 *
 * # Initialization Process
 *
 * 1. Create the application state (empty message slot, broadcast channel)
 * 2. Create and configure the router
 * 3. Bind the listener and serve until Ctrl-C
 */

use axum::Router;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::RelayConfig;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: &RelayConfig) -> Router<()> {
    tracing::info!("Initializing SMS relay");

    let app_state = AppState::new(config);
    tracing::info!(
        "Message store and broadcast channel initialized (capacity {})",
        config.event_capacity
    );

    create_router(app_state, config)
}

/// Bind to the configured port and serve until shutdown
///
/// # Errors
///
/// `BackendError::Io` if the listener cannot be bound or the server fails
pub async fn run(config: RelayConfig) -> Result<(), BackendError> {
    let app = create_app(&config);
    let addr = config.listen_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
