//! Route Configuration Module
//!
//! This module configures all HTTP routes for the relay server.
//!
//! # Routes
//!
//! - `POST /sms` - Submit the latest message
//! - `DELETE /sms` - Remove the latest message
//! - `GET /events` - Push channel (Server-Sent Events)
//! - `GET /` - Viewer page, served from the static directory
//!
//! Any other path is looked up in the static directory and otherwise
//! answered with a JSON 404.

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
