/**
 * Message Store
 *
 * The store owns the single message slot and the expiry action scheduled for
 * it. Every mutation (`set`, `clear` and the expiry firing) runs under one
 * `tokio::sync::Mutex`, and every committed transition is reported to the
 * store's [`SlotObserver`] before the lock is released. Observers therefore
 * see transitions in commit order.
 *
 * # Expiry ownership
 *
 * Each installed slot carries a generation number. The expiry action only
 * clears the slot if the generation still matches, and replacing or clearing
 * the slot aborts the previous action while the lock is held. A stale timer
 * can never remove a newer message.
 */
use crate::backend::store::expiry::ExpiryHandle;
use crate::shared::event::DeletionReason;
use crate::shared::message::{now_epoch_millis, now_rfc3339, Snapshot, DEFAULT_MESSAGE, MESSAGE_TTL};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Why a slot was cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// Explicit delete request
    Deleted,
    /// TTL reached
    Expired,
}

impl From<ClearReason> for DeletionReason {
    fn from(reason: ClearReason) -> Self {
        match reason {
            ClearReason::Deleted => DeletionReason::Deleted,
            ClearReason::Expired => DeletionReason::Expired,
        }
    }
}

/// A committed transition of the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange<'a> {
    /// A new message was installed (replacing any previous one)
    Set(&'a Snapshot),
    /// The slot went from present to absent
    Cleared(ClearReason),
}

/// Receives committed slot transitions
///
/// Called with the slot lock held, so implementations must not block and
/// must not call back into the store.
pub trait SlotObserver: Send + Sync {
    fn committed(&self, change: SlotChange<'_>);
}

/// Observer that ignores every transition
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SlotObserver for NoopObserver {
    fn committed(&self, _change: SlotChange<'_>) {}
}

struct Slot {
    snapshot: Snapshot,
    generation: u64,
    expiry: ExpiryHandle,
}

#[derive(Default)]
struct SlotState {
    current: Option<Slot>,
    generation: u64,
}

/// Single source of truth for the latest message
///
/// Cloning yields another handle to the same slot.
///
/// # Example
///
/// ```rust,no_run
/// use smsrelay::backend::store::{MessageStore, ClearReason};
///
/// # async fn example() {
/// let store = MessageStore::default();
/// let snapshot = store.set(Some("hello".to_string()), None).await;
/// assert_eq!(store.peek().await, Some(snapshot));
/// assert!(store.clear(ClearReason::Deleted).await.is_some());
/// # }
/// ```
#[derive(Clone)]
pub struct MessageStore {
    state: Arc<Mutex<SlotState>>,
    observer: Arc<dyn SlotObserver>,
    ttl: Duration,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new(Arc::new(NoopObserver))
    }
}

impl MessageStore {
    /// Create an empty store reporting transitions to `observer`
    pub fn new(observer: Arc<dyn SlotObserver>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState::default())),
            observer,
            ttl: MESSAGE_TTL,
        }
    }

    /// Time-to-live applied to every new message
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Install a new message, replacing any current one
    ///
    /// `content` falls back to [`DEFAULT_MESSAGE`] and `timestamp` to the
    /// current time. The previous expiry action is cancelled and a new one is
    /// scheduled `ttl` from now. Never fails.
    pub async fn set(&self, content: Option<String>, timestamp: Option<String>) -> Snapshot {
        let content = content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let timestamp = timestamp
            .filter(|t| !t.is_empty())
            .unwrap_or_else(now_rfc3339);

        let mut state = self.state.lock().await;

        if let Some(previous) = self.take_live(&mut state) {
            tracing::debug!(
                "[Store] Replacing message of generation {} before its expiry",
                previous.generation
            );
        }

        state.generation += 1;
        let generation = state.generation;
        let expires_at = now_epoch_millis() + self.ttl.as_millis() as i64;
        let snapshot = Snapshot::new(content, timestamp, expires_at);
        let expiry = self.schedule_expiry(Instant::now() + self.ttl, generation);

        state.current = Some(Slot {
            snapshot: snapshot.clone(),
            generation,
            expiry,
        });
        self.observer.committed(SlotChange::Set(&snapshot));

        snapshot
    }

    /// Remove the current message
    ///
    /// Returns the removed snapshot, or `None` if the store was already
    /// empty. Clearing an empty store is a no-op and is not reported to the
    /// observer. A message past its deadline counts as absent: it is reported
    /// as expired, never as deleted.
    pub async fn clear(&self, reason: ClearReason) -> Option<Snapshot> {
        let mut state = self.state.lock().await;
        let slot = self.take_live(&mut state)?;
        self.observer.committed(SlotChange::Cleared(reason));
        Some(slot.snapshot)
    }

    /// Current message, if present and not past its deadline
    pub async fn peek(&self) -> Option<Snapshot> {
        self.inspect(|snapshot| snapshot.cloned()).await
    }

    /// Run `f` against the current message while holding the slot lock
    ///
    /// No transition can commit while `f` runs, which lets callers pair a
    /// read of the slot with registering for subsequent transitions.
    pub async fn inspect<R>(&self, f: impl FnOnce(Option<&Snapshot>) -> R) -> R {
        let state = self.state.lock().await;
        let now = Instant::now();
        let current = state
            .current
            .as_ref()
            .filter(|slot| slot.expiry.deadline() > now)
            .map(|slot| &slot.snapshot);
        f(current)
    }

    /// Take the current slot and cancel its expiry
    ///
    /// A slot whose deadline has passed but whose expiry task has not run yet
    /// is committed as expired here and `None` is returned; the task then
    /// finds no matching generation.
    fn take_live(&self, state: &mut SlotState) -> Option<Slot> {
        let slot = state.current.take()?;
        slot.expiry.cancel();

        if slot.expiry.deadline() <= Instant::now() {
            tracing::info!(
                "[Store] Message expired after TTL (expiresAt={})",
                slot.snapshot.expires_at
            );
            self.observer.committed(SlotChange::Cleared(ClearReason::Expired));
            return None;
        }
        Some(slot)
    }

    fn schedule_expiry(&self, deadline: Instant, generation: u64) -> ExpiryHandle {
        let state = Arc::downgrade(&self.state);
        let observer = self.observer.clone();
        ExpiryHandle::schedule(deadline, move || fire_expiry(state, observer, generation))
    }
}

/// Expiry action for the slot installed with `generation`
async fn fire_expiry(state: Weak<Mutex<SlotState>>, observer: Arc<dyn SlotObserver>, generation: u64) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock().await;

    match &state.current {
        Some(slot) if slot.generation == generation => {}
        _ => {
            tracing::debug!("[Store] Ignoring stale expiry of generation {}", generation);
            return;
        }
    }

    if let Some(slot) = state.current.take() {
        tracing::info!(
            "[Store] Message expired after TTL (expiresAt={})",
            slot.snapshot.expires_at
        );
        observer.committed(SlotChange::Cleared(ClearReason::Expired));
    }
}
