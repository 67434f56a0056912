// crates/dashboard/src/routes/status.rs
//! Point-in-time snapshot endpoints.
//!
//! - `GET /api/status` - snapshot, elapsed seconds and configured domain
//! - `GET /api/debug`  - per-pod detail plus aggregate counts

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{ManagedApplication, PodPhase, ReadyRatio, SnapshotView, WorkloadInstance};
use crate::progress::DeploymentStats;
use crate::state::AppState;

/// Response for `GET /api/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse<'a> {
    #[serde(flatten)]
    pub snapshot: SnapshotView<'a>,
    pub started_at: DateTime<Utc>,
    /// Configured base domain, `null` when running with local links.
    pub domain: Option<&'a str>,
}

/// GET /api/status - current snapshot.
///
/// The body borrows from the snapshot, so it is serialized before the
/// handler returns.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.store.snapshot();
    Json(StatusResponse {
        snapshot: snapshot.view(),
        started_at: snapshot.started_at,
        domain: state.config.base_domain.as_deref(),
    })
    .into_response()
}

/// One pod as shown by `/api/debug`.
#[derive(Debug, Serialize)]
pub struct PodDetail<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
    pub status: PodPhase,
    pub ready: ReadyRatio,
    pub ready_containers: u32,
    pub total_containers: u32,
    pub is_ready: bool,
}

impl<'a> From<&'a WorkloadInstance> for PodDetail<'a> {
    fn from(pod: &'a WorkloadInstance) -> Self {
        Self {
            namespace: &pod.namespace,
            name: &pod.name,
            status: pod.phase,
            ready: pod.ready,
            ready_containers: pod.ready.ready,
            total_containers: pod.ready.total,
            is_ready: pod.is_ready(),
        }
    }
}

/// Response for `GET /api/debug`.
#[derive(Debug, Serialize)]
pub struct DebugResponse<'a> {
    pub argocd_apps: &'a [ManagedApplication],
    pub pods: Vec<PodDetail<'a>>,
    pub summary: DeploymentStats,
    pub progress: u8,
    pub phase: &'a str,
    pub elapsed: u64,
}

/// GET /api/debug - diagnostic view of what the collector last saw.
pub async fn get_debug(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.store.snapshot();
    Json(DebugResponse {
        argocd_apps: &snapshot.applications,
        pods: snapshot.workloads.iter().map(PodDetail::from).collect(),
        summary: DeploymentStats::collect(&snapshot.applications, &snapshot.workloads),
        progress: snapshot.progress,
        phase: &snapshot.phase,
        elapsed: snapshot.elapsed_secs(),
    })
    .into_response()
}

/// Create the status routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/debug", get(get_debug))
}
