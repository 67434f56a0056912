// crates/inference/src/lib.rs
//! Keyword sentiment inference API.
//!
//! Stateless: every request is classified on its own by
//! [`sentiment::classify`]. The only shared state is configuration.

pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod sentiment;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::InferenceConfig;
pub use error::*;
pub use metrics::init_metrics;
pub use routes::api_routes;
pub use state::AppState;

/// Create the Axum application with all routes and middleware.
pub fn create_app(config: InferenceConfig) -> Router {
    Router::new()
        .merge(api_routes(AppState::new(config)))
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
