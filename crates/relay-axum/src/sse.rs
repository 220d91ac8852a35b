//! SSE streams bound to broadcaster subscriptions.
//!
//! Each open `/sse` connection owns one [`SubscriberStream`]. The stream holds
//! the receiving half of a bounded per-connection queue plus the
//! [`Subscription`] guard, so when axum drops the response body (client went
//! away, server shutting down) the subscriber is removed from the
//! broadcaster.

use std::borrow::Cow;
use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::{Stream, StreamExt};
use relay_core::{Broadcaster, Message, Subscription, SubscriptionHandle, channel_sink};
use tokio_stream::wrappers::ReceiverStream;

/// Stream of SSE events for one connected client.
#[derive(Debug)]
pub struct SubscriberStream {
    messages: ReceiverStream<Message>,
    subscription: Subscription,
}

impl SubscriberStream {
    /// Subscribe to `broadcaster` with a queue of `queue_capacity` messages.
    pub fn open(broadcaster: &Arc<Broadcaster>, queue_capacity: usize) -> Self {
        let (sink, receiver) = channel_sink(queue_capacity);
        let subscription = broadcaster.subscription(Arc::new(sink));

        tracing::info!(
            subscription = %subscription.handle(),
            subscribers = broadcaster.subscriber_count(),
            "SSE stream opened"
        );

        Self {
            messages: ReceiverStream::new(receiver),
            subscription,
        }
    }

    /// Handle of the underlying registration.
    pub const fn handle(&self) -> SubscriptionHandle {
        self.subscription.handle()
    }
}

impl Stream for SubscriberStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.messages
            .poll_next_unpin(cx)
            .map(|next| next.map(|message| Ok(message_event(&message))))
    }
}

impl Drop for SubscriberStream {
    fn drop(&mut self) {
        tracing::info!(subscription = %self.handle(), "SSE stream closed");
    }
}

/// Frame a message as an SSE `data` event.
///
/// Line breaks of any style become separate `data:` lines, which clients
/// join back with `\n`.
pub fn message_event(message: &Message) -> Event {
    Event::default().data(normalize_line_breaks(message.as_str()))
}

fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Wrap a subscriber stream into the `/sse` response.
///
/// Adds an explicit persistent-connection header on top of the
/// `text/event-stream` content type axum sets, and a keep-alive comment so
/// idle connections survive proxies.
pub fn sse_response(stream: SubscriberStream, keep_alive: Duration) -> impl IntoResponse {
    let sse = Sse::new(stream).keep_alive(KeepAlive::new().interval(keep_alive).text("ping"));
    (
        [(header::CONNECTION, HeaderValue::from_static("keep-alive"))],
        sse,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stream_yields_published_messages() {
        let broadcaster = Arc::new(Broadcaster::new());
        let mut stream = SubscriberStream::open(&broadcaster, 8);

        broadcaster.publish("one");
        broadcaster.publish("two");

        assert!(stream.next().await.unwrap().is_ok());
        assert!(stream.next().await.unwrap().is_ok());
    }

    #[test]
    fn test_dropping_stream_unsubscribes() {
        let broadcaster = Arc::new(Broadcaster::new());
        let stream = SubscriberStream::open(&broadcaster, 8);
        let handle = stream.handle();
        assert!(broadcaster.is_subscribed(handle));

        drop(stream);
        assert!(!broadcaster.is_subscribed(handle));
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn test_stream_waits_for_publish() {
        let broadcaster = Arc::new(Broadcaster::new());
        let mut stream = tokio_test::task::spawn(SubscriberStream::open(&broadcaster, 8));
        tokio_test::assert_pending!(stream.poll_next());

        broadcaster.publish("wake");

        assert!(stream.is_woken());
        assert!(matches!(
            tokio_test::assert_ready!(stream.poll_next()),
            Some(Ok(_))
        ));
    }

    #[test]
    fn test_line_breaks_are_normalized() {
        assert_eq!(
            normalize_line_breaks("line one\r\nline two\rline three"),
            "line one\nline two\nline three"
        );
        assert!(matches!(
            normalize_line_breaks("plain\ntext"),
            Cow::Borrowed("plain\ntext")
        ));
    }
}
