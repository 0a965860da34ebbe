/**
 * Relay Event Broadcasting
 *
 * This module provides the broadcast channel type used to fan events out to
 * every connected subscriber, the helper that sends on it, and the store
 * observer that turns committed slot transitions into events.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`. Every receiver gets a
 * copy of each event sent after it subscribed. Sending never blocks and never
 * fails the caller: with no receivers the event is simply dropped.
 */
use crate::backend::store::{SlotChange, SlotObserver};
use crate::shared::RelayEvent;
use tokio::sync::broadcast;

/// Broadcast channel for relay events
///
/// Cloning the sender is cheap; every clone feeds the same set of receivers.
pub type RelayEventBroadcast = broadcast::Sender<RelayEvent>;

/// Broadcast a relay event to all subscribers
///
/// # Returns
///
/// Number of subscribers that received the event (0 if there are none)
pub fn broadcast_event(broadcast_tx: &RelayEventBroadcast, event: RelayEvent) -> usize {
    let name = event.name();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("[Realtime] {} broadcast to {} subscribers", name, subscriber_count);
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive {}: {:?}", name, e);
            0
        }
    }
}

/// Store observer that publishes every committed transition
#[derive(Clone)]
pub struct EventPublisher {
    broadcast_tx: RelayEventBroadcast,
}

impl EventPublisher {
    pub fn new(broadcast_tx: RelayEventBroadcast) -> Self {
        Self { broadcast_tx }
    }
}

impl SlotObserver for EventPublisher {
    fn committed(&self, change: SlotChange<'_>) {
        let event = match change {
            SlotChange::Set(snapshot) => RelayEvent::new_message(snapshot.clone()),
            SlotChange::Cleared(reason) => RelayEvent::deleted(reason.into()),
        };
        broadcast_event(&self.broadcast_tx, event);
    }
}
