// crates/inference/src/state.rs
use std::sync::Arc;

use crate::config::InferenceConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: InferenceConfig,
}

impl AppState {
    pub fn new(config: InferenceConfig) -> Arc<Self> {
        Arc::new(Self { config })
    }
}
