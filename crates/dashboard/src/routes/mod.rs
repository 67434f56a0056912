// crates/dashboard/src/routes/mod.rs
//! HTTP route handlers for the dashboard.

pub mod badge;
pub mod health;
pub mod index;
pub mod metrics;
pub mod status;
pub mod stream;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET /                  - Dashboard page
/// - GET /api/status        - Current snapshot, elapsed seconds, base domain
/// - GET /api/stream        - SSE stream of snapshots
/// - GET /api/debug         - Per-pod detail and aggregate counts
/// - GET /api/badge/{name}  - shields.io badge (argocd, pods, health, deployment)
/// - GET /api/health        - Health check
/// - GET /metrics           - Prometheus metrics
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(index::router())
        .merge(metrics::router())
        .nest("/api", health::router())
        .nest("/api", status::router())
        .nest("/api", stream::router())
        .nest("/api", badge::router())
        .with_state(state)
}
