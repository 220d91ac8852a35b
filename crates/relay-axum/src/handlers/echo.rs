//! Pure JSON endpoints.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use relay_core::EchoResponse;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// Query parameters for `GET /echo`.
#[derive(Debug, Default, Deserialize)]
pub struct EchoParams {
    #[serde(default)]
    pub input: String,
}

/// Echo the `input` parameter back in several forms.
pub async fn echo(
    query: Result<Query<EchoParams>, QueryRejection>,
) -> Result<Json<EchoResponse>, HttpError> {
    let Query(params) = query?;
    Ok(Json(EchoResponse::from_input(&params.input)))
}

/// Fixed sample payload for `GET /json`.
#[derive(Debug, Serialize)]
pub struct SampleJson {
    text: &'static str,
    numbers: [u8; 3],
}

/// Serve the fixed sample payload.
pub async fn sample() -> Json<SampleJson> {
    Json(SampleJson {
        text: "hi",
        numbers: [1, 2, 3],
    })
}
