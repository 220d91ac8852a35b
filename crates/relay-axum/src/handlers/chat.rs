//! Send path - publishes a message to every open stream.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::state::AppState;

type QueryPairs = Vec<(String, String)>;

/// Publish the `message` query value if present and non-empty.
///
/// Always answers `200` with an empty body, whether or not anything was
/// published and however many subscribers received it. A repeated
/// `message` key publishes its values joined with `,`.
pub async fn send(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> StatusCode {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparsable chat query");
            return StatusCode::OK;
        }
    };

    if let Some(message) = message_param(pairs).filter(|m| !m.is_empty()) {
        let report = state.broadcaster.publish(message);
        tracing::debug!(
            delivered = report.delivered,
            failed = report.failed,
            pruned = report.pruned,
            "Chat message broadcast"
        );
    }
    StatusCode::OK
}

fn message_param(pairs: QueryPairs) -> Option<String> {
    let values: Vec<String> = pairs
        .into_iter()
        .filter_map(|(key, value)| (key == "message").then_some(value))
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
