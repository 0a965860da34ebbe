/**
 * Message Data Structures
 *
 * This module defines the latest-message snapshot that is pushed to viewers,
 * the body accepted by the submission endpoint and the JSON bodies returned
 * by the submission and deletion endpoints.
 *
 * The snapshot is shared between the store, the push channel and the HTTP
 * layer, so its field names follow the wire format (`message`, `timestamp`,
 * `expiresAt`).
 */
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Content used when a submission carries no usable `key`
pub const DEFAULT_MESSAGE: &str = "No message received";

/// How long a submitted message stays current
pub const MESSAGE_TTL: Duration = Duration::from_millis(180_000);

/// Immutable read of the current message slot
///
/// # Fields
/// * `message` - Opaque message content
/// * `timestamp` - Caller-supplied or server-assigned creation time (RFC 3339);
///   informational only, never used for expiry
/// * `expires_at` - Absolute deadline in epoch milliseconds
///
/// # Example
/// ```rust
/// use smsrelay::shared::Snapshot;
///
/// let snapshot = Snapshot::new("hello", "2024-01-01T00:00:00Z", 1_704_067_380_000);
/// assert_eq!(snapshot.message, "hello");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub message: String,
    pub timestamp: String,
    pub expires_at: i64,
}

impl Snapshot {
    pub fn new(message: impl Into<String>, timestamp: impl Into<String>, expires_at: i64) -> Self {
        Self {
            message: message.into(),
            timestamp: timestamp.into(),
            expires_at,
        }
    }
}

/// Body of a submission request (`POST /sms`)
///
/// Both fields are optional and loosely typed: the endpoint never rejects a
/// submission, it substitutes defaults instead. Use [`SmsSubmission::content`]
/// and [`SmsSubmission::timestamp`] to read the normalized values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SmsSubmission {
    /// Message content
    #[serde(default)]
    pub key: Option<serde_json::Value>,
    /// ISO 8601 creation time
    #[serde(default)]
    pub time: Option<serde_json::Value>,
}

impl SmsSubmission {
    /// Submission from plain strings
    pub fn new(key: Option<&str>, time: Option<&str>) -> Self {
        Self {
            key: key.map(|k| serde_json::Value::String(k.to_string())),
            time: time.map(|t| serde_json::Value::String(t.to_string())),
        }
    }

    /// Content of the submission, or `None` when the default applies
    pub fn content(&self) -> Option<String> {
        text_field(self.key.as_ref())
    }

    /// Timestamp of the submission, or `None` when the current time applies
    pub fn timestamp(&self) -> Option<String> {
        text_field(self.time.as_ref())
    }
}

/// Normalize a loosely typed field: empty strings, `null`, `false` and `0`
/// count as absent, other scalars are used in their JSON text form.
fn text_field(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Response body of a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub expires_at: i64,
}

impl SubmitResponse {
    pub fn received(expires_at: i64) -> Self {
        Self {
            success: true,
            message: "SMS received successfully".to_string(),
            expires_at,
        }
    }
}

/// Response body of a deletion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    /// Build the response for a deletion, depending on whether a message was current
    pub fn for_outcome(had_message: bool) -> Self {
        let message = if had_message { "SMS deleted" } else { "No SMS to delete" };
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Current UTC time in RFC 3339 with millisecond precision
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Current UTC time in epoch milliseconds
pub fn now_epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
