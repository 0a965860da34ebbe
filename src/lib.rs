//! SMS Relay - Main Library
//!
//! The relay keeps a single "latest message" and pushes it to every connected
//! viewer in near-real-time. A message expires automatically three minutes
//! after it was submitted; a new submission replaces it and restarts the
//! clock, and a delete request removes it early.
//!
//! # Module Structure
//!
//! - **`shared`** - Snapshot, events, request/response bodies, configuration
//! - **`backend`** - Message store, broadcast gateway, Axum server (only
//!   compiled with the `ssr` feature, enabled by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use smsrelay::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config);
//! let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! - `POST /sms` - `{key, time}` as JSON or form data
//! - `DELETE /sms`
//! - `GET /events` - Server-Sent Events: `newMessage`, `messageDeleted`
//! - `GET /` - Viewer page
//!
//! # Thread Safety
//!
//! All mutations of the message slot, including the expiry firing, are
//! serialized by one async mutex. Events reach subscribers in commit order.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
