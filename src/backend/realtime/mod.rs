//! Real-time Push Module
//!
//! This module connects the message store to the viewers: it owns the
//! broadcast channel, the gateway used by the HTTP handlers, and the
//! Server-Sent Events endpoint subscribers listen on.
//!
//! # Architecture
//!
//! - **`broadcast`** - Channel type, send helper, store observer
//! - **`gateway`** - `BroadcastGateway` and `Subscription`
//! - **`subscription`** - SSE subscription handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event broadcasting utilities
//! ├── gateway.rs      - Submit/remove/connect operations
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Event Types
//!
//! - `newMessage` - A message was submitted, or a viewer connected while one is current
//! - `messageDeleted` - The message was deleted (`deleted`), timed out
//!   (`expired`), or nothing was current when a viewer connected (`none`)

/// Event broadcasting utilities
pub mod broadcast;

/// Broadcast gateway
pub mod gateway;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, EventPublisher, RelayEventBroadcast};
pub use gateway::{BroadcastGateway, RemoveOutcome, Subscription};
pub use subscription::{event_stream, handle_event_subscription};
