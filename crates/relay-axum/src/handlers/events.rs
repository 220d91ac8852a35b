//! SSE events handler - real-time message streaming.
//!
//! Streams every broadcast chat message to the connected client.

use axum::extract::State;
use axum::response::IntoResponse;

use crate::sse::{SubscriberStream, sse_response};
use crate::state::AppState;

/// SSE stream endpoint.
///
/// Subscribes on connect; the subscription ends when the client
/// disconnects and axum drops the stream.
pub async fn stream(State(state): State<AppState>) -> impl IntoResponse {
    let stream = SubscriberStream::open(&state.broadcaster, state.settings.queue_capacity);
    sse_response(stream, state.settings.keep_alive())
}
