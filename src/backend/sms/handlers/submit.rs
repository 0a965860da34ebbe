/**
 * SMS Submission Handler
 *
 * This module implements the handler for POST /sms, the endpoint an SMS
 * forwarder calls to publish the latest message.
 *
 * # Request Body
 *
 * Either `application/json` or `application/x-www-form-urlencoded`, with two
 * optional fields:
 * - `key` - message content (default `"No message received"`)
 * - `time` - ISO 8601 timestamp (default: now)
 *
 * The endpoint never rejects a submission. A body that cannot be parsed is
 * treated as an empty one and the defaults apply.
 */
use crate::backend::realtime::gateway::BroadcastGateway;
use crate::shared::{SmsSubmission, SubmitResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::Deserialize;

/// Form-encoded submission; form values are always text
#[derive(Debug, Default, Deserialize)]
struct FormSubmission {
    key: Option<String>,
    time: Option<String>,
}

/// Parse a submission body according to its content type
pub fn parse_submission(headers: &HeaderMap, body: &[u8]) -> SmsSubmission {
    if body.iter().all(u8::is_ascii_whitespace) {
        return SmsSubmission::default();
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/x-www-form-urlencoded") {
        return match serde_urlencoded::from_bytes::<FormSubmission>(body) {
            Ok(form) => SmsSubmission::new(form.key.as_deref(), form.time.as_deref()),
            Err(e) => {
                tracing::warn!("[Server] Unparseable form submission, using defaults: {:?}", e);
                SmsSubmission::default()
            }
        };
    }

    serde_json::from_slice::<SmsSubmission>(body).unwrap_or_else(|e| {
        tracing::warn!("[Server] Unparseable JSON submission, using defaults: {:?}", e);
        SmsSubmission::default()
    })
}

/// Handle SMS submission (POST /sms)
///
/// Installs the message, pushes `newMessage` to every subscriber and reports
/// when the message will expire.
///
/// # Example Request
///
/// ```http
/// POST /sms HTTP/1.1
/// Content-Type: application/json
///
/// {"key":"hello","time":"2024-01-01T00:00:00Z"}
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: application/json
///
/// {"success":true,"message":"SMS received successfully","expiresAt":1704067380000}
/// ```
pub async fn handle_sms_submit(
    State(gateway): State<BroadcastGateway>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<SubmitResponse> {
    let submission = parse_submission(&headers, &body);
    let snapshot = gateway
        .submit(submission.content(), submission.timestamp())
        .await;

    Json(SubmitResponse::received(snapshot.expires_at))
}
