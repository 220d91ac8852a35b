//! End-to-end tests for the send path and the SSE stream path.

mod common;

use axum::http::{StatusCode, header};

use common::{assert_no_event, get, next_event, test_app};

#[tokio::test]
async fn sse_response_headers() {
    let (app, _) = test_app();

    let response = get(&app, "/sse").await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );
    assert_eq!(headers[header::CONNECTION], "keep-alive");
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
}

#[tokio::test]
async fn single_subscriber_receives_message() {
    let (app, broadcaster) = test_app();

    let mut s1 = get(&app, "/sse").await.into_body();
    assert_eq!(broadcaster.subscriber_count(), 1);

    let sent = get(&app, "/chat?message=hello").await;
    assert_eq!(sent.status(), StatusCode::OK);

    assert_eq!(next_event(&mut s1).await, "data: hello\n\n");
}

#[tokio::test]
async fn closed_stream_stops_receiving() {
    let (app, broadcaster) = test_app();

    let mut s1 = get(&app, "/sse").await.into_body();
    let mut s2 = get(&app, "/sse").await.into_body();
    assert_eq!(broadcaster.subscriber_count(), 2);

    get(&app, "/chat?message=x").await;
    assert_eq!(next_event(&mut s1).await, "data: x\n\n");
    assert_eq!(next_event(&mut s2).await, "data: x\n\n");

    // Client disconnect: axum drops the response body.
    drop(s2);
    assert_eq!(broadcaster.subscriber_count(), 1);

    get(&app, "/chat?message=y").await;
    assert_eq!(next_event(&mut s1).await, "data: y\n\n");
}

#[tokio::test]
async fn empty_or_missing_message_publishes_nothing() {
    let (app, broadcaster) = test_app();

    let mut s1 = get(&app, "/sse").await.into_body();

    get(&app, "/chat").await;
    get(&app, "/chat?message=").await;
    get(&app, "/chat?other=value").await;
    assert_no_event(&mut s1).await;

    // The first frame after the ignored sends is the marker.
    broadcaster.publish("marker");
    assert_eq!(next_event(&mut s1).await, "data: marker\n\n");
}

#[tokio::test]
async fn late_subscriber_sees_only_later_messages() {
    let (app, _) = test_app();

    let mut early = get(&app, "/sse").await.into_body();
    get(&app, "/chat?message=m1").await;

    let mut late = get(&app, "/sse").await.into_body();
    get(&app, "/chat?message=m2").await;

    assert_eq!(next_event(&mut early).await, "data: m1\n\n");
    assert_eq!(next_event(&mut early).await, "data: m2\n\n");
    assert_eq!(next_event(&mut late).await, "data: m2\n\n");
    assert_no_event(&mut late).await;
}

#[tokio::test]
async fn percent_encoded_message_is_decoded() {
    let (app, _) = test_app();

    let mut s1 = get(&app, "/sse").await.into_body();
    get(&app, "/chat?message=hello%20world%21").await;

    assert_eq!(next_event(&mut s1).await, "data: hello world!\n\n");
}

#[tokio::test]
async fn multiline_message_uses_one_data_line_per_line() {
    let (app, _) = test_app();

    let mut s1 = get(&app, "/sse").await.into_body();
    get(&app, "/chat?message=first%0D%0Asecond").await;

    assert_eq!(next_event(&mut s1).await, "data: first\ndata: second\n\n");
}

#[tokio::test]
async fn many_streams_all_receive() {
    let (app, broadcaster) = test_app();

    let mut streams = Vec::new();
    for _ in 0..20 {
        streams.push(get(&app, "/sse").await.into_body());
    }
    assert_eq!(broadcaster.subscriber_count(), 20);

    get(&app, "/chat?message=everyone").await;

    for stream in &mut streams {
        assert_eq!(next_event(stream).await, "data: everyone\n\n");
    }

    drop(streams);
    assert_eq!(broadcaster.subscriber_count(), 0);
}

#[tokio::test]
async fn stalled_stream_does_not_block_others() {
    let (app, _) = test_app();

    // Never read from this one; its queue (16) overflows.
    let _stalled = get(&app, "/sse").await.into_body();
    let mut active = get(&app, "/sse").await.into_body();

    for i in 0..40 {
        get(&app, &format!("/chat?message=n{i}")).await;
        assert_eq!(next_event(&mut active).await, format!("data: n{i}\n\n"));
    }
}
