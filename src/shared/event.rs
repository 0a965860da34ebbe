/**
 * Push Channel Events
 *
 * This module defines the events pushed to connected viewers. There are only
 * two of them: `newMessage`, carrying the current snapshot, and
 * `messageDeleted`, carrying the reason the slot is now empty.
 */
use crate::shared::message::Snapshot;
use serde::{Deserialize, Serialize};

/// Why the message slot is empty
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeletionReason {
    /// Removed by an explicit delete request
    Deleted,
    /// Removed by the TTL timer
    Expired,
    /// Nothing was current when the subscriber connected
    #[serde(rename = "none")]
    NoMessage,
}

/// Payload of a `messageDeleted` event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deletion {
    pub reason: DeletionReason,
}

/// Event that can be broadcast to all subscribers
///
/// The serde representation is the tagged form used when an event travels as
/// a single JSON document. The push channel itself sends [`RelayEvent::name`]
/// as the event name and [`RelayEvent::payload_json`] as the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum RelayEvent {
    NewMessage(Snapshot),
    MessageDeleted(Deletion),
}

impl RelayEvent {
    /// Create a `newMessage` event
    pub fn new_message(snapshot: Snapshot) -> Self {
        Self::NewMessage(snapshot)
    }

    /// Create a `messageDeleted` event
    pub fn deleted(reason: DeletionReason) -> Self {
        Self::MessageDeleted(Deletion { reason })
    }

    /// Event name on the push channel
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage(_) => "newMessage",
            Self::MessageDeleted(_) => "messageDeleted",
        }
    }

    /// JSON payload on the push channel
    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::NewMessage(snapshot) => serde_json::to_string(snapshot),
            Self::MessageDeleted(deletion) => serde_json::to_string(deletion),
        }
    }
}
