// crates/dashboard/src/lib.rs
//! GitOps deployment dashboard.
//!
//! A background [`collector::StatusCollector`] polls the cluster, derives a
//! progress score and phase label, and publishes immutable snapshots into a
//! [`state::StateStore`]. HTTP handlers only ever read the latest snapshot.

pub mod badge;
pub mod collector;
pub mod command;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod progress;
pub mod routes;
pub mod source;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use collector::StatusCollector;
pub use config::DashboardConfig;
pub use error::*;
pub use metrics::init_metrics;
pub use routes::api_routes;
pub use source::{CliClusterSource, ClusterSource};
pub use state::{AppState, StateStore};

/// Create the Axum application with all routes and middleware.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
