//! Shared helpers for relay-axum integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use relay_axum::{CorsConfig, ServerConfig, bootstrap, create_router};
use relay_core::Broadcaster;
use tower::ServiceExt;

/// How long to wait for an SSE frame before failing the test.
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

/// Config with a small queue and default everything else.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::with_defaults().with_port(0);
    config.settings.queue_capacity = 16;
    config
}

/// Router plus a handle on its broadcaster.
pub fn test_app() -> (Router, Arc<Broadcaster>) {
    let ctx = bootstrap(&test_config()).unwrap();
    let broadcaster = Arc::clone(&ctx.broadcaster);
    (create_router(ctx, &CorsConfig::AllowAll), broadcaster)
}

/// Issue a GET against a clone of `app`.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a whole response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the next SSE frame from an open stream body.
pub async fn next_event(body: &mut Body) -> String {
    let frame = tokio::time::timeout(EVENT_TIMEOUT, body.frame())
        .await
        .expect("timed out waiting for SSE frame")
        .expect("SSE stream ended")
        .unwrap();
    let data = frame.into_data().unwrap();
    String::from_utf8(data.to_vec()).unwrap()
}

/// Assert that no SSE frame arrives within a short window.
pub async fn assert_no_event(body: &mut Body) {
    let waited = tokio::time::timeout(Duration::from_millis(100), body.frame()).await;
    assert!(waited.is_err(), "unexpected SSE frame");
}
