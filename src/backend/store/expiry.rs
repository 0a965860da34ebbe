/**
 * Cancellable Deferred Actions
 *
 * A scheduled expiry is a spawned tokio task that sleeps until its deadline
 * and then runs a single action. The handle returned by [`ExpiryHandle::schedule`]
 * aborts the task; aborting is idempotent and also takes effect while the
 * action is suspended at an await point (for example waiting for a lock).
 *
 * Dropping the handle cancels the action as well, so a scheduled expiry
 * never outlives the slot that owns it.
 *
 * Aborting alone cannot stop an action that has already passed its last
 * await point, so callers pair the handle with an ownership check inside the
 * action (see the generation check in `MessageStore`).
 */
use std::future::Future;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Handle to a scheduled action
#[derive(Debug)]
pub struct ExpiryHandle {
    deadline: Instant,
    task: JoinHandle<()>,
}

impl ExpiryHandle {
    /// Run `action` once `deadline` is reached, unless cancelled first
    pub fn schedule<F, Fut>(deadline: Instant, action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action().await;
        });
        Self { deadline, task }
    }

    /// When the action fires
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Cancel the action. Calling this more than once, or after the action
    /// finished, is a no-op.
    pub fn cancel(&self) {
        self.task.abort();
    }

}

impl Drop for ExpiryHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
