//! Bounded per-subscriber queue sink.
//!
//! Each streaming connection gets its own queue. The broadcaster only ever
//! performs a non-blocking `try_send`, and the connection drains the queue on
//! its own task, so a slow client can fill its own queue but never delays
//! delivery to anyone else.
//!
//! Overflow policy is drop-newest: when the queue is full the message being
//! published is not enqueued for that subscriber and `deliver` reports
//! [`DeliveryError::QueueFull`]. Messages already queued are kept.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::error::DeliveryError;
use crate::message::Message;
use crate::ports::MessageSink;

/// Receiving half of a [`ChannelSink`], owned by the connection.
pub type MessageReceiver = mpsc::Receiver<Message>;

/// Sink that enqueues onto a bounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::Sender<Message>,
    capacity: usize,
}

/// Create a sink/receiver pair with room for `capacity` pending messages.
///
/// A capacity of zero is raised to one.
pub fn channel_sink(capacity: usize) -> (ChannelSink, MessageReceiver) {
    let capacity = capacity.max(1);
    let (sender, receiver) = mpsc::channel(capacity);
    (ChannelSink { sender, capacity }, receiver)
}

impl ChannelSink {
    /// Maximum number of messages that can wait in the queue.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl MessageSink for ChannelSink {
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError> {
        match self.sender.try_send(message.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DeliveryError::QueueFull {
                capacity: self.capacity,
            }),
            Err(TrySendError::Closed(_)) => Err(DeliveryError::Closed),
        }
    }
}
