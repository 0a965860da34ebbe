//! Backend Module
//!
//! This module contains all server-side code of the SMS relay: the message
//! store, the broadcast gateway, the HTTP endpoints and the server setup.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is on
//! by default).
//!
//! # Architecture
//!
//! - **`store`** - The single message slot and its TTL-driven expiry
//! - **`realtime`** - Broadcast gateway and the Server-Sent Events push channel
//! - **`sms`** - `POST /sms` and `DELETE /sms` handlers
//! - **`routes`** - Router assembly, static page, 404 fallback
//! - **`server`** - Application state, configuration loading, serving
//! - **`error`** - Backend error type
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── store/          - Message store
//! ├── realtime/       - Broadcast gateway, push channel
//! ├── sms/            - SMS endpoint handlers
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # Control Flow
//!
//! A submission reaches `BroadcastGateway::submit`, which calls
//! `MessageStore::set`. The store cancels any pending expiry, installs the
//! new message, schedules a new expiry and reports the transition to its
//! observer, which broadcasts `newMessage`. Deletion and expiry follow the
//! same path and broadcast `messageDeleted`.
//!
//! # Thread Safety
//!
//! - `tokio::sync::Mutex` around the slot and its expiry handle
//! - `broadcast::Sender` for fan-out to subscribers
//! - Axum handlers are `Send + Sync`

/// Message store
#[cfg(feature = "ssr")]
pub mod store;

/// Real-time push system
#[cfg(feature = "ssr")]
pub mod realtime;

/// SMS endpoint handlers
#[cfg(feature = "ssr")]
pub mod sms;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use store::MessageStore;
#[cfg(feature = "ssr")]
pub use realtime::{BroadcastGateway, Subscription};
#[cfg(feature = "ssr")]
pub use error::BackendError;
