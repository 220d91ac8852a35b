//! The broadcaster: a process-wide publish/subscribe hub.
//!
//! One `Broadcaster` is constructed at startup and shared (behind an `Arc`)
//! with everything that publishes or streams. It owns the subscriber set and
//! nothing else.
//!
//! # Concurrency
//!
//! The set is a `BTreeMap` behind a single `RwLock`. `subscribe` and
//! `unsubscribe` take the write lock for one insert/remove. `publish` takes
//! the read lock only long enough to clone a snapshot of `(handle, sink)`
//! pairs, then delivers with no lock held. A concurrent `unsubscribe` during
//! a publish therefore can neither crash it nor cause a double delivery, and
//! a sink is free to call back into the broadcaster.
//!
//! Handles come from a monotonically increasing counter, so iterating the
//! map visits subscribers in subscription order.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::message::Message;
use crate::ports::MessageSink;

type SubscriberMap = BTreeMap<SubscriptionHandle, Arc<dyn MessageSink>>;

/// Opaque token identifying one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(u64);

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Outcome counts for a single publish.
///
/// Purely informational; publishing never fails from the caller's view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Sinks that accepted the message.
    pub delivered: usize,
    /// Sinks that returned an error or panicked.
    pub failed: usize,
    /// Failed sinks that were closed and have been unsubscribed.
    pub pruned: usize,
}

impl PublishReport {
    /// Total number of subscribers attempted.
    pub const fn attempted(&self) -> usize {
        self.delivered + self.failed
    }
}

/// Publish/subscribe hub fanning each message out to every registered sink.
pub struct Broadcaster {
    subscribers: RwLock<SubscriberMap>,
    next_id: AtomicU64,
}

impl Broadcaster {
    /// Create a broadcaster with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a sink for all future publishes.
    ///
    /// Always succeeds. The returned handle is unique for the lifetime of
    /// this broadcaster.
    pub fn subscribe(&self, sink: Arc<dyn MessageSink>) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let count = {
            let mut subscribers = self.write();
            subscribers.insert(handle, sink);
            subscribers.len()
        };

        tracing::debug!(subscription = %handle, subscribers = count, "Subscriber registered");
        handle
    }

    /// Register a sink and tie the registration to the returned guard.
    ///
    /// Dropping the [`Subscription`] unsubscribes, so a streaming response
    /// that owns the guard is removed as soon as its connection goes away.
    pub fn subscription(self: &Arc<Self>, sink: Arc<dyn MessageSink>) -> Subscription {
        let handle = self.subscribe(sink);
        Subscription {
            broadcaster: Arc::clone(self),
            handle,
        }
    }

    /// Remove a registration.
    ///
    /// Unknown or already-removed handles are a no-op. Returns whether a
    /// registration was actually removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let (removed, count) = {
            let mut subscribers = self.write();
            let removed = subscribers.remove(&handle).is_some();
            (removed, subscribers.len())
        };

        if removed {
            tracing::debug!(subscription = %handle, subscribers = count, "Subscriber removed");
        }
        removed
    }

    /// Deliver `message` to every subscriber registered at the time of the
    /// call, each exactly once.
    ///
    /// Per-subscriber failures (an error or a panic from the sink) are logged
    /// and counted but never stop delivery to the rest. Sinks reporting
    /// [`DeliveryError::Closed`](crate::DeliveryError::Closed) are removed.
    pub fn publish(&self, message: impl Into<Message>) -> PublishReport {
        let message = message.into();
        let snapshot: Vec<(SubscriptionHandle, Arc<dyn MessageSink>)> = self
            .read()
            .iter()
            .map(|(handle, sink)| (*handle, Arc::clone(sink)))
            .collect();

        let mut report = PublishReport::default();
        for (handle, sink) in snapshot {
            match panic::catch_unwind(AssertUnwindSafe(|| sink.deliver(&message))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(err)) if err.is_terminal() => {
                    report.failed += 1;
                    if self.unsubscribe(handle) {
                        report.pruned += 1;
                    }
                    tracing::debug!(subscription = %handle, error = %err, "Pruned closed subscriber");
                }
                Ok(Err(err)) => {
                    report.failed += 1;
                    tracing::warn!(subscription = %handle, error = %err, "Delivery failed");
                }
                Err(_) => {
                    report.failed += 1;
                    tracing::warn!(subscription = %handle, "Subscriber panicked during delivery");
                }
            }
        }

        tracing::trace!(
            len = message.as_str().len(),
            delivered = report.delivered,
            failed = report.failed,
            "Message published"
        );
        report
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.read().len()
    }

    /// Whether `handle` is currently registered.
    pub fn is_subscribed(&self, handle: SubscriptionHandle) -> bool {
        self.read().contains_key(&handle)
    }

    // Sinks never run under the lock, so a poisoned lock still holds a
    // consistent map.
    fn read(&self) -> RwLockReadGuard<'_, SubscriberMap> {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SubscriberMap> {
        self.subscribers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

/// Guard returned by [`Broadcaster::subscription`]; unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    broadcaster: Arc<Broadcaster>,
    handle: SubscriptionHandle,
}

impl Subscription {
    /// The handle of the guarded registration.
    pub const fn handle(&self) -> SubscriptionHandle {
        self.handle
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.broadcaster.unsubscribe(self.handle);
    }
}
