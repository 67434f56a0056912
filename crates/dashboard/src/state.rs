// crates/dashboard/src/state.rs
//! Shared dashboard state.
//!
//! [`StateStore`] holds the current [`DeploymentSnapshot`] behind an
//! `Arc` that is swapped whole on every publish. Readers clone the `Arc`
//! and work on an immutable value, so they never see fields from two
//! different ticks. Uses `std::sync::RwLock` (not `tokio::sync::RwLock`)
//! because the lock is only held for a pointer copy, never across `.await`.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use crate::config::DashboardConfig;
use crate::model::{DeploymentSnapshot, ManagedApplication, SharedSnapshot, WorkloadInstance};

/// Everything the collector derives in one tick.
#[derive(Debug, Clone)]
pub struct SnapshotUpdate {
    pub applications: Vec<ManagedApplication>,
    pub workloads: Vec<WorkloadInstance>,
    pub progress: u8,
    pub phase: String,
}

/// Single-writer, many-reader home of the current snapshot.
#[derive(Debug, Clone)]
pub struct StateStore {
    current: Arc<RwLock<SharedSnapshot>>,
}

impl StateStore {
    /// A store holding [`DeploymentSnapshot::initial`].
    pub fn new() -> Self {
        Self::with_snapshot(DeploymentSnapshot::initial())
    }

    pub fn with_snapshot(snapshot: DeploymentSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> SharedSnapshot {
        // A panicking writer cannot leave a half-built snapshot behind: the
        // guarded value is only ever a complete Arc.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the derived fields, keeping the start time.
    ///
    /// Returns the snapshot that was replaced.
    pub fn publish(&self, update: SnapshotUpdate) -> SharedSnapshot {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(DeploymentSnapshot {
            started: guard.started,
            started_at: guard.started_at,
            applications: update.applications,
            workloads: update.workloads,
            progress: update.progress.min(100),
            phase: update.phase,
        });
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Snapshot written by the collector, read by every handler.
    pub store: StateStore,
    pub config: DashboardConfig,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(store: StateStore, config: DashboardConfig) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            store,
            config,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
