//! Server-Sent Events stream for floor wallboards.
//!
//! Each broadcast [`AppEvent`](crate::state::AppEvent) goes out as a
//! named SSE event (`production_logged`, `summary_computed`, ...) with
//! a JSON payload, so a wallboard can listen for just the kinds it
//! renders. Lagged or closed receivers drop out silently.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::SharedState;

/// GET /api/events — subscribe to live floor updates.
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let event = result.ok()?;
        let data = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().event(event.kind()).data(data)))
    });

    // Keep idle wallboard connections alive through proxies.
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
