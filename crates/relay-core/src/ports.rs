//! Sink trait for delivering messages to subscribers.
//!
//! This module defines the abstraction the broadcaster delivers through.
//! Implementations handle transport details (channels, SSE streams, test
//! recorders, etc.).

use crate::error::DeliveryError;
use crate::message::Message;

/// Receiver side of a subscription.
///
/// The broadcaster calls `deliver` once per published message while the
/// sink is registered. Implementations must not block: a sink usually sits
/// in front of a network connection that can stall, so it should enqueue or
/// fail fast rather than wait.
///
/// # Implementations
///
/// - [`ChannelSink`](crate::channel::ChannelSink) - bounded per-subscriber queue
/// - [`NoopSink`] - discards everything
/// - Any `Fn(&Message) -> Result<(), DeliveryError> + Send + Sync` closure
pub trait MessageSink: Send + Sync {
    /// Hand one message to this subscriber.
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError>;
}

impl<F> MessageSink for F
where
    F: Fn(&Message) -> Result<(), DeliveryError> + Send + Sync,
{
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError> {
        self(message)
    }
}

/// A sink that accepts and discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    pub const fn new() -> Self {
        Self
    }
}

impl MessageSink for NoopSink {
    fn deliver(&self, _message: &Message) -> Result<(), DeliveryError> {
        Ok(())
    }
}
