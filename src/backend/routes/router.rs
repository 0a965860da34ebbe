/**
 * Router Configuration
 *
 * This module assembles all routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. SMS endpoints (`POST /sms`, `DELETE /sms`)
 * 2. Push channel (`GET /events`)
 * 3. Static files from the configured directory (the viewer page at `/`)
 * 4. JSON 404 for everything else
 */

use axum::{
    handler::HandlerWithoutStateExt,
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::backend::error::BackendError;
use crate::backend::realtime::subscription::handle_event_subscription;
use crate::backend::server::state::AppState;
use crate::backend::sms::handlers::{handle_sms_delete, handle_sms_submit};
use crate::shared::RelayConfig;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the broadcast gateway
/// * `config` - Relay configuration (static directory)
pub fn create_router(app_state: AppState, config: &RelayConfig) -> Router<()> {
    let static_files = ServeDir::new(&config.static_dir).fallback(handle_not_found.into_service());

    Router::new()
        .route("/sms", post(handle_sms_submit).delete(handle_sms_delete))
        .route("/events", get(handle_event_subscription))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Fallback for paths with neither a route nor a static file
async fn handle_not_found(uri: Uri) -> BackendError {
    tracing::debug!("[Server] No route for {}", uri.path());
    BackendError::not_found(uri.path())
}
