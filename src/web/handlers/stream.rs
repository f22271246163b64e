//! SSE endpoint that streams text character by character

use crate::state::AppState;
use crate::streaming::character_stream;
use axum::{
    extract::{Query, State},
    http::header,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Json, Response,
    },
};
use serde::Deserialize;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::StreamExt;

#[derive(Debug, Deserialize)]
pub struct StreamParams {
    #[serde(default)]
    pub text: String,
}

/// Stream the `text` query parameter back one character at a time.
///
/// Empty or absent text gets the JSON error object instead of a stream. Each
/// event frame carries one `StreamEvent` payload; the connection closes once
/// the completion event has been sent.
pub async fn stream_text(
    State(state): State<AppState>,
    Query(params): Query<StreamParams>,
) -> Response {
    if params.text.is_empty() {
        return Json(json!({
            "error": "Please provide a 'text' query parameter",
        }))
        .into_response();
    }

    tracing::info!(
        "📡 SSE connection opened, streaming {} characters",
        params.text.chars().count()
    );

    let delay = Duration::from_millis(state.config.char_delay_ms);
    let stream = character_stream(params.text, delay)
        .map(|event| Ok::<_, Infallible>(Event::default().data(event.to_sse_data())));

    let sse = Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    );

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        sse,
    )
        .into_response()
}
