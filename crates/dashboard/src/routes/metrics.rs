// crates/dashboard/src/routes/metrics.rs
//! `GET /metrics` - Prometheus scrape target.
//!
//! Mounted at the root rather than under `/api`, where scrapers expect it.

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use gitops_demo_observability::prometheus;

use crate::state::AppState;

/// 503 until `init_metrics` has installed the recorder.
pub async fn render_metrics() -> Response {
    let Some(output) = prometheus::render() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response();
    };
    ([(header::CONTENT_TYPE, prometheus::CONTENT_TYPE)], output).into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(render_metrics))
}
