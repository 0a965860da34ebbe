//! Message Store Module
//!
//! This module holds the single "latest message" slot, its TTL-driven expiry
//! and the resolution of races between submissions, manual clears and a
//! pending expiry.
//!
//! # Architecture
//!
//! - **`state`** - `MessageStore`, the slot and the observer seam
//! - **`expiry`** - `ExpiryHandle`, a cancellable deferred action
//!
//! # Thread Safety
//!
//! The slot and its expiry handle sit behind one `tokio::sync::Mutex`. The
//! expiry action acquires the same lock before touching the slot.

/// Slot state and mutations
pub mod state;

/// Cancellable deferred actions
pub mod expiry;

pub use expiry::ExpiryHandle;
pub use state::{ClearReason, MessageStore, NoopObserver, SlotChange, SlotObserver};
