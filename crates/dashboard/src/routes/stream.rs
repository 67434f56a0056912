// crates/dashboard/src/routes/stream.rs
//! `GET /api/stream` - live snapshot push over Server-Sent Events.
//!
//! Every connection gets its own loop: read the current snapshot, send it as
//! one `data:` event, wait one stream interval, repeat. The loop is not tied
//! to the collector's cadence, and every event carries the full state, so a
//! missed event is repaired by the next one. Dropping the connection drops
//! the stream, which ends the loop.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use tokio::time::MissedTickBehavior;

use crate::metrics::StreamClientGuard;
use crate::state::AppState;

/// SSE handler streaming one snapshot event per stream interval.
///
/// # Event payload
///
/// `{"argocd_apps":[..],"pods":[..],"progress":42,"phase":"..","elapsed":17}`
///
/// The first event is sent immediately on connect.
pub async fn stream_snapshots(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let store = state.store.clone();
    let period = state.config.stream_interval;

    let stream = async_stream::stream! {
        let _client = StreamClientGuard::new();
        tracing::debug!("stream client connected");

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let snapshot = store.snapshot();
            match serde_json::to_string(&snapshot.view()) {
                Ok(data) => yield Ok(Event::default().data(data)),
                Err(e) => tracing::warn!(error = %e, "failed to serialize snapshot event"),
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stream", get(stream_snapshots))
}
