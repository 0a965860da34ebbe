//! Common test utilities and helpers
//!
//! - Test server construction around a fresh, isolated `AppState`
//! - Draining a subscription without waiting

#![allow(dead_code)]

use axum_test::TestServer;
use smsrelay::backend::realtime::Subscription;
use smsrelay::backend::server::state::AppState;
use smsrelay::backend::routes::create_router;
use smsrelay::shared::{RelayConfig, RelayEvent};

/// Test server plus the state behind it, so tests can subscribe directly
pub fn create_test_server() -> (TestServer, AppState) {
    let config = RelayConfig::default();
    let app_state = AppState::new(&config);
    let server = TestServer::new(create_router(app_state.clone(), &config))
        .expect("failed to start test server");
    (server, app_state)
}

/// Every event already delivered to `subscription`
pub fn drain(subscription: &mut Subscription) -> Vec<RelayEvent> {
    std::iter::from_fn(|| subscription.try_next_event()).collect()
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected {:?} to contain {:?}",
            $haystack,
            $needle
        );
    };
}
