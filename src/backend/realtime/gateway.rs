/**
 * Broadcast Gateway
 *
 * The gateway is the bridge between external triggers (submission, manual
 * delete) and the connected subscribers. It owns no state of its own beyond
 * the broadcast channel: mutations go to the `MessageStore`, whose observer
 * publishes every committed transition on the channel. The automatic expiry
 * path therefore reaches subscribers through the same channel without any
 * request in flight.
 *
 * # Connect / disconnect
 *
 * `connect` registers a receiver and reads the current snapshot under the
 * store lock, then queues the sync event (`newMessage` or
 * `messageDeleted { reason: "none" }`) as the first event of the
 * subscription. Dropping a `Subscription` is the disconnect notification.
 */
use crate::backend::realtime::broadcast::{EventPublisher, RelayEventBroadcast};
use crate::backend::store::{ClearReason, MessageStore};
use crate::shared::{DeletionReason, RelayEvent, Snapshot};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use uuid::Uuid;

/// Result of a remove request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Whether a message was current before the request
    pub had_message: bool,
}

/// Gateway between producers and subscribers
///
/// Cloning yields another handle to the same store and channel.
///
/// # Example
///
/// ```rust,no_run
/// use smsrelay::backend::realtime::BroadcastGateway;
///
/// # async fn example() {
/// let gateway = BroadcastGateway::new(256);
/// let mut viewer = gateway.connect().await;
/// gateway.submit(Some("hello".to_string()), None).await;
/// let sync = viewer.next_event().await;       // messageDeleted { reason: "none" }
/// let update = viewer.next_event().await;     // newMessage { message: "hello", .. }
/// # }
/// ```
#[derive(Clone)]
pub struct BroadcastGateway {
    store: MessageStore,
    broadcast_tx: RelayEventBroadcast,
}

impl BroadcastGateway {
    /// Create a gateway with a fresh store
    ///
    /// `capacity` is how many events a subscriber may fall behind before it
    /// skips ahead; it must be non-zero.
    pub fn new(capacity: usize) -> Self {
        let (broadcast_tx, _) = broadcast::channel::<RelayEvent>(capacity);
        let store = MessageStore::new(Arc::new(EventPublisher::new(broadcast_tx.clone())));
        Self {
            store,
            broadcast_tx,
        }
    }

    /// The store behind this gateway
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Install a new message and push `newMessage` to every subscriber
    pub async fn submit(&self, content: Option<String>, timestamp: Option<String>) -> Snapshot {
        let snapshot = self.store.set(content, timestamp).await;
        tracing::info!(
            "[Gateway] Processed SMS: {} chars, timestamp={}, expiresAt={}",
            snapshot.message.chars().count(),
            snapshot.timestamp,
            expiry_rfc3339(snapshot.expires_at)
        );
        snapshot
    }

    /// Remove the current message, pushing `messageDeleted { reason: "deleted" }`
    /// if there was one. Removing from an empty store pushes nothing.
    pub async fn remove(&self) -> RemoveOutcome {
        let had_message = self.store.clear(ClearReason::Deleted).await.is_some();
        if had_message {
            tracing::info!("[Gateway] Latest SMS deleted by user");
        } else {
            tracing::debug!("[Gateway] Delete requested with no current SMS");
        }
        RemoveOutcome { had_message }
    }

    /// Current message, if any
    pub async fn peek(&self) -> Option<Snapshot> {
        self.store.peek().await
    }

    /// Connect a new subscriber
    ///
    /// The returned subscription yields the sync event first, then every
    /// event committed after the connection.
    pub async fn connect(&self) -> Subscription {
        let (receiver, sync_event) = self
            .store
            .inspect(|current| {
                let event = match current {
                    Some(snapshot) => RelayEvent::new_message(snapshot.clone()),
                    None => RelayEvent::deleted(DeletionReason::NoMessage),
                };
                (self.broadcast_tx.subscribe(), event)
            })
            .await;

        let subscription = Subscription {
            id: Uuid::new_v4(),
            pending: Some(sync_event),
            receiver,
        };
        tracing::info!(
            "[Gateway] Subscriber {} connected ({} connected)",
            subscription.id,
            self.subscriber_count()
        );
        subscription
    }

    /// Number of connected subscribers
    pub fn subscriber_count(&self) -> usize {
        self.broadcast_tx.receiver_count()
    }
}

fn expiry_rfc3339(expires_at: i64) -> String {
    chrono::DateTime::from_timestamp_millis(expires_at)
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        .unwrap_or_else(|| expires_at.to_string())
}

/// A connected subscriber's view of the push channel
///
/// Dropping the subscription disconnects it.
pub struct Subscription {
    id: Uuid,
    pending: Option<RelayEvent>,
    receiver: broadcast::Receiver<RelayEvent>,
}

impl Subscription {
    /// Identifier used in logs
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wait for the next event
    ///
    /// Returns `None` once the gateway is gone. A subscriber that fell more
    /// than the channel capacity behind skips the missed events.
    pub async fn next_event(&mut self) -> Option<RelayEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Gateway] Subscriber {} lagged, skipped {} events", self.id, skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next event if one is already available
    pub fn try_next_event(&mut self) -> Option<RelayEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("[Gateway] Subscriber {} lagged, skipped {} events", self.id, skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        tracing::info!("[Gateway] Subscriber {} disconnected", self.id);
    }
}
