/**
 * Application State Management
 *
 * This module defines the application state shared by all request handlers
 * and the `FromRef` implementations for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The broadcast gateway (and through it the message store)
 * - Push channel settings
 *
 * Several `AppState` values can coexist in one process; each owns its own
 * message slot, which keeps tests isolated from one another.
 */

use axum::extract::FromRef;
use std::time::Duration;
use crate::backend::realtime::gateway::BroadcastGateway;
use crate::shared::RelayConfig;

/// Application state
///
/// # Fields
///
/// * `gateway` - Broadcast gateway in front of the message store
/// * `keep_alive` - Interval between keep-alive comments on the push channel
///
/// # Usage
///
/// ```rust
/// use smsrelay::backend::server::state::AppState;
/// use axum::extract::State;
///
/// async fn handler(State(app_state): State<AppState>) {
///     let current = app_state.gateway.peek().await;
///     // ...
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Gateway used by the SMS handlers and the push channel
    pub gateway: BroadcastGateway,

    /// Keep-alive interval for push channel streams
    pub keep_alive: Duration,
}

impl AppState {
    /// Create a state with an empty message slot
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            gateway: BroadcastGateway::new(config.event_capacity),
            keep_alive: config.keep_alive,
        }
    }
}

/// Implement FromRef for BroadcastGateway
///
/// This allows Axum handlers to extract the gateway directly from
/// `AppState` using `State(BroadcastGateway)`.
impl FromRef<AppState> for BroadcastGateway {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.clone()
    }
}
