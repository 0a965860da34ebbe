//! SMS Endpoint Module
//!
//! HTTP surface through which producers publish and remove the latest
//! message. The handlers only translate requests; all state lives in the
//! message store behind the broadcast gateway.
//!
//! - `POST /sms` - submit a message (`key`, `time`)
//! - `DELETE /sms` - remove the current message

/// Request handlers
pub mod handlers;

pub use handlers::{handle_sms_delete, handle_sms_submit};
