//! Shared Module
//!
//! This module contains types shared between the message store, the push
//! channel and the HTTP layer. None of them depend on the server stack, so
//! they compile without the `ssr` feature.
//!
//! # Overview
//!
//! - `message` - The latest-message snapshot and the HTTP request/response bodies
//! - `event` - Events pushed to subscribers
//! - `config` - Relay configuration

/// Message snapshot and HTTP bodies
pub mod message;

/// Push channel events
pub mod event;

/// Relay configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{
    DeleteResponse, SmsSubmission, Snapshot, SubmitResponse, DEFAULT_MESSAGE, MESSAGE_TTL,
};
pub use event::{Deletion, DeletionReason, RelayEvent};
pub use config::{ConfigError, RelayConfig, RelayConfigBuilder};
