//! SMS Handlers Module
//!
//! This module contains the Axum handlers for the `/sms` endpoint.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports and documentation
//! ├── submit.rs  - POST /sms
//! └── delete.rs  - DELETE /sms
//! ```
//!
//! Both handlers are infallible: missing input is replaced by defaults and
//! deleting nothing is a successful no-op.

/// Submission handler
pub mod submit;

/// Deletion handler
pub mod delete;

pub use delete::handle_sms_delete;
pub use submit::{handle_sms_submit, parse_submission};
