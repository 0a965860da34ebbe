/**
 * SMS Deletion Handler
 *
 * This module implements the handler for DELETE /sms, which removes the
 * latest message before its TTL runs out. Deleting when nothing is current
 * is reported as success with an informational message.
 */
use crate::backend::realtime::gateway::BroadcastGateway;
use crate::shared::DeleteResponse;
use axum::{extract::State, Json};

/// Handle SMS deletion (DELETE /sms)
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: application/json
///
/// {"success":true,"message":"SMS deleted"}
/// ```
pub async fn handle_sms_delete(State(gateway): State<BroadcastGateway>) -> Json<DeleteResponse> {
    let outcome = gateway.remove().await;
    Json(DeleteResponse::for_outcome(outcome.had_message))
}
