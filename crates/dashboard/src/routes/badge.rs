// crates/dashboard/src/routes/badge.rs
//! `GET /api/badge/{name}` - shields.io endpoint badges.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::badge::{Badge, BadgeKind};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/badge/{name} - one of `argocd`, `pods`, `health`, `deployment`.
pub async fn get_badge(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Badge>> {
    let kind: BadgeKind = name.parse().map_err(ApiError::BadgeNotFound)?;
    Ok(Json(kind.render(&state.store.snapshot())))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/badge/{name}", get(get_badge))
}
