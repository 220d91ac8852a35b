//! Chat page, client script and the not-found fallback.

use axum::http::{Uri, header};
use axum::response::{Html, IntoResponse};

use crate::error::HttpError;

const CHAT_HTML: &str = include_str!("../../assets/chat.html");
const CHAT_JS: &str = include_str!("../../assets/chat.js");

/// Serve the chat page.
pub async fn index() -> Html<&'static str> {
    Html(CHAT_HTML)
}

/// Serve the chat client script.
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        CHAT_JS,
    )
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(uri.path().to_owned())
}
