// crates/dashboard/src/model.rs
//! Cluster objects as the dashboard sees them.
//!
//! Everything here is rebuilt from scratch on every collector tick; nothing
//! carries identity across ticks beyond its name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Phase label of a freshly started dashboard, before the first tick lands.
pub const INITIAL_PHASE: &str = "Initializing";

// ============================================================================
// Applications
// ============================================================================

/// Git-vs-cluster sync state reported by the GitOps controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    Synced,
    OutOfSync,
    #[serde(other)]
    Unknown,
}

impl From<&str> for SyncStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "Synced" => Self::Synced,
            "OutOfSync" => Self::OutOfSync,
            _ => Self::Unknown,
        }
    }
}

/// Aggregated resource health reported by the GitOps controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Progressing,
    Degraded,
    Suspended,
    Missing,
    #[serde(other)]
    Unknown,
}

impl From<&str> for HealthStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "Healthy" => Self::Healthy,
            "Progressing" => Self::Progressing,
            "Degraded" => Self::Degraded,
            "Suspended" => Self::Suspended,
            "Missing" => Self::Missing,
            _ => Self::Unknown,
        }
    }
}

/// A deployable unit tracked by the GitOps controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedApplication {
    pub name: String,
    pub sync: SyncStatus,
    pub health: HealthStatus,
}

impl ManagedApplication {
    pub fn new(name: impl Into<String>, sync: SyncStatus, health: HealthStatus) -> Self {
        Self {
            name: name.into(),
            sync,
            health,
        }
    }
}

// ============================================================================
// Workloads
// ============================================================================

/// Pod lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodPhase {
    Running,
    Pending,
    Init,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

impl From<&str> for PodPhase {
    fn from(raw: &str) -> Self {
        match raw {
            "Running" => Self::Running,
            "Pending" => Self::Pending,
            "Init" => Self::Init,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

/// Ready containers out of total containers, rendered as `"ready/total"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyRatio {
    pub ready: u32,
    pub total: u32,
}

impl ReadyRatio {
    pub const fn new(ready: u32, total: u32) -> Self {
        Self { ready, total }
    }

    /// Every container ready, and there is at least one container.
    pub fn is_ready(&self) -> bool {
        self.total > 0 && self.ready == self.total
    }
}

impl fmt::Display for ReadyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ready, self.total)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid ready ratio {0:?}, expected \"ready/total\"")]
pub struct ParseRatioError(String);

impl FromStr for ReadyRatio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ready, total) = s
            .split_once('/')
            .ok_or_else(|| ParseRatioError(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| ParseRatioError(s.to_string()))
        };
        Ok(Self::new(parse(ready)?, parse(total)?))
    }
}

impl Serialize for ReadyRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReadyRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A pod in one of the watched namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadInstance {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "status")]
    pub phase: PodPhase,
    pub ready: ReadyRatio,
}

impl WorkloadInstance {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        phase: PodPhase,
        ready: ReadyRatio,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            phase,
            ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_ready()
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Point-in-time aggregate of everything the dashboard shows.
///
/// Immutable once built. The [`StateStore`](crate::state::StateStore) swaps
/// whole snapshots, so readers always see fields from the same tick.
#[derive(Debug, Clone)]
pub struct DeploymentSnapshot {
    /// Monotonic process start, used for `elapsed`.
    pub started: Instant,
    /// Wall-clock process start, for display.
    pub started_at: DateTime<Utc>,
    pub applications: Vec<ManagedApplication>,
    pub workloads: Vec<WorkloadInstance>,
    /// Always within `0..=100`.
    pub progress: u8,
    pub phase: String,
}

impl DeploymentSnapshot {
    /// The snapshot a dashboard starts with: nothing observed yet.
    pub fn initial() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            applications: Vec::new(),
            workloads: Vec::new(),
            progress: 0,
            phase: INITIAL_PHASE.to_string(),
        }
    }

    /// Whole seconds since the dashboard started.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn view(&self) -> SnapshotView<'_> {
        SnapshotView {
            argocd_apps: &self.applications,
            pods: &self.workloads,
            progress: self.progress,
            phase: &self.phase,
            elapsed: self.elapsed_secs(),
        }
    }
}

/// Wire shape shared by `/api/status` and each `/api/stream` event.
#[derive(Debug, Serialize)]
pub struct SnapshotView<'a> {
    pub argocd_apps: &'a [ManagedApplication],
    pub pods: &'a [WorkloadInstance],
    pub progress: u8,
    pub phase: &'a str,
    pub elapsed: u64,
}

/// Shared handle to a published snapshot.
pub type SharedSnapshot = Arc<DeploymentSnapshot>;
