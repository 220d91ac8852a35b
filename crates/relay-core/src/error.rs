//! Error types for the broadcast core.
//!
//! The core surfaces almost no errors to callers: `subscribe` always
//! succeeds, `unsubscribe` of an unknown handle is a no-op, and `publish`
//! swallows per-subscriber failures. `DeliveryError` exists so sinks can
//! report what went wrong and the broadcaster can log it and decide whether
//! to drop the subscriber.

use thiserror::Error;

/// Failure to hand a message to a single subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The subscriber's outgoing queue is full; this message was dropped
    /// for that subscriber only.
    #[error("subscriber queue is full (capacity {capacity})")]
    QueueFull {
        /// Capacity of the queue that overflowed.
        capacity: usize,
    },

    /// The receiving side is gone (connection closed).
    #[error("subscriber is closed")]
    Closed,

    /// Any other sink-specific failure.
    #[error("delivery failed: {0}")]
    Failed(String),
}

impl DeliveryError {
    /// Whether the subscriber can never receive again and should be removed.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
