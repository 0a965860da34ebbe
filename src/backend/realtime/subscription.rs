/**
 * Push Channel Subscription Handler
 *
 * This module implements the Server-Sent Events handler for the `/events`
 * endpoint, the push channel viewers listen on.
 *
 * # Server-Sent Events (SSE)
 *
 * Each relay event becomes one SSE event whose name is the relay event name
 * (`newMessage` or `messageDeleted`) and whose data is its JSON payload:
 *
 * ```text
 * event: newMessage
 * data: {"message":"hello","timestamp":"2024-01-01T00:00:00Z","expiresAt":1704067380000}
 *
 * event: messageDeleted
 * data: {"reason":"expired"}
 * ```
 *
 * # Connection Management
 *
 * - The first event of every stream brings the viewer to the current state
 * - Connections are kept alive with SSE comment lines
 * - When the client goes away the stream is dropped, which drops the
 *   subscription and logs the disconnect
 */
use crate::backend::realtime::gateway::Subscription;
use crate::backend::server::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;

/// Convert a subscription into an SSE event stream
pub fn event_stream(
    subscription: Subscription,
) -> impl tokio_stream::Stream<Item = Result<Event, axum::Error>> {
    stream::unfold(subscription, |mut subscription| async move {
        // Loop until we get an event that serializes
        loop {
            let event = subscription.next_event().await?;
            let data = match event.payload_json() {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("[Realtime] Failed to serialize {}: {:?}", event.name(), e);
                    continue;
                }
            };

            tracing::debug!(
                "[Realtime] Sending {} to subscriber {}",
                event.name(),
                subscription.id()
            );
            let sse_event = Event::default().event(event.name()).data(data);
            return Some((Ok(sse_event), subscription));
        }
    })
}

/// Handle push channel subscription (GET /events)
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
/// Cache-Control: no-cache
///
/// event: messageDeleted
/// data: {"reason":"none"}
/// ```
pub async fn handle_event_subscription(
    State(app_state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let subscription = app_state.gateway.connect().await;

    Sse::new(event_stream(subscription)).keep_alive(
        KeepAlive::new()
            .interval(app_state.keep_alive)
            .text("keep-alive"),
    )
}
