// crates/dashboard/src/collector.rs
//! Background refresh of cluster state.
//!
//! One tick = list applications and pods, keep pods in watched namespaces,
//! derive progress and phase, publish a new snapshot. A listing that fails
//! in any way counts as empty for that tick; the loop itself never stops.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::DashboardConfig;
use crate::error::SourceError;
use crate::metrics::{record_source_failure, record_tick};
use crate::model::SharedSnapshot;
use crate::progress::{compute_phase, compute_progress, DeploymentStats};
use crate::source::ClusterSource;
use crate::state::{SnapshotUpdate, StateStore};

pub struct StatusCollector {
    source: Arc<dyn ClusterSource>,
    store: StateStore,
    interval: Duration,
    namespaces: Vec<String>,
}

impl StatusCollector {
    pub fn new(source: Arc<dyn ClusterSource>, store: StateStore, config: &DashboardConfig) -> Self {
        Self {
            source,
            store,
            interval: config.poll_interval,
            namespaces: config.namespaces.clone(),
        }
    }

    /// Refresh once and publish. Returns the new snapshot.
    pub async fn tick(&self) -> SharedSnapshot {
        let t0 = Instant::now();
        let (applications, workloads) = tokio::join!(
            self.source.list_applications(),
            self.source.list_workloads()
        );
        let applications = or_empty(applications, "application");
        let mut workloads = or_empty(workloads, "pod");
        workloads.retain(|w| self.namespaces.iter().any(|ns| *ns == w.namespace));

        let progress = compute_progress(&applications, &workloads);
        let phase = compute_phase(progress, &workloads);
        let stats = DeploymentStats::collect(&applications, &workloads);

        let previous = self.store.publish(SnapshotUpdate {
            applications,
            workloads,
            progress,
            phase,
        });
        let current = self.store.snapshot();

        if previous.phase != current.phase {
            tracing::info!(
                from = %previous.phase,
                to = %current.phase,
                progress,
                "Deployment phase changed"
            );
        }
        tracing::debug!(
            source = self.source.name(),
            apps = stats.total_apps,
            pods = stats.total_pods,
            progress,
            duration_ms = t0.elapsed().as_millis() as u64,
            "Collector tick complete"
        );
        record_tick(t0.elapsed(), progress, &stats);

        current
    }

    /// Tick forever at the configured interval. The first tick is immediate.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(
            source = self.source.name(),
            interval_secs = self.interval.as_secs_f64(),
            namespaces = ?self.namespaces,
            "Status collector started"
        );
        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

fn or_empty<T>(result: Result<Vec<T>, SourceError>, listing: &'static str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::debug!(listing, error = %e, "Listing failed, treating as empty");
        record_source_failure(listing);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::model::{
        HealthStatus, ManagedApplication, PodPhase, ReadyRatio, SyncStatus, WorkloadInstance,
        INITIAL_PHASE,
    };
    use crate::progress::{PHASE_COMPLETE, PHASE_INITIALIZING};

    /// Canned listings; `None` makes the listing fail.
    #[derive(Default)]
    struct FakeSource {
        applications: Mutex<Option<Vec<ManagedApplication>>>,
        workloads: Mutex<Option<Vec<WorkloadInstance>>>,
    }

    impl FakeSource {
        fn set(&self, apps: Option<Vec<ManagedApplication>>, pods: Option<Vec<WorkloadInstance>>) {
            *self.applications.lock().unwrap() = apps;
            *self.workloads.lock().unwrap() = pods;
        }
    }

    fn failure() -> SourceError {
        SourceError::Timeout {
            program: "fake".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[async_trait]
    impl ClusterSource for FakeSource {
        async fn list_applications(&self) -> Result<Vec<ManagedApplication>, SourceError> {
            self.applications.lock().unwrap().clone().ok_or_else(failure)
        }

        async fn list_workloads(&self) -> Result<Vec<WorkloadInstance>, SourceError> {
            self.workloads.lock().unwrap().clone().ok_or_else(failure)
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn synced_apps() -> Vec<ManagedApplication> {
        vec![
            ManagedApplication::new("ml-inference", SyncStatus::Synced, HealthStatus::Healthy),
            ManagedApplication::new("monitoring", SyncStatus::Synced, HealthStatus::Healthy),
        ]
    }

    fn pod(namespace: &str, name: &str) -> WorkloadInstance {
        WorkloadInstance::new(namespace, name, PodPhase::Running, ReadyRatio::new(1, 1))
    }

    fn collector(source: Arc<FakeSource>) -> (StatusCollector, StateStore) {
        let store = StateStore::new();
        let collector = StatusCollector::new(source, store.clone(), &DashboardConfig::default());
        (collector, store)
    }

    #[tokio::test]
    async fn test_tick_publishes_progress_and_phase() {
        let source = Arc::new(FakeSource::default());
        source.set(
            Some(synced_apps()),
            Some(vec![pod("ml-inference", "api"), pod("argocd", "server")]),
        );
        let (collector, store) = collector(source);

        let snapshot = collector.tick().await;

        assert_eq!(snapshot.progress, 100);
        assert_eq!(snapshot.phase, PHASE_COMPLETE);
        assert_eq!(store.snapshot().progress, 100);
    }

    #[tokio::test]
    async fn test_tick_filters_unwatched_namespaces() {
        let source = Arc::new(FakeSource::default());
        source.set(
            Some(synced_apps()),
            Some(vec![
                pod("ml-inference", "api"),
                pod("kube-system", "coredns"),
                pod("default", "nginx"),
            ]),
        );
        let (collector, _store) = collector(source);

        let snapshot = collector.tick().await;

        let names: Vec<_> = snapshot.workloads.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["api"]);
    }

    #[tokio::test]
    async fn test_failed_listings_collapse_to_empty() {
        let source = Arc::new(FakeSource::default());
        source.set(None, None);
        let (collector, store) = collector(source);

        let snapshot = collector.tick().await;

        assert!(snapshot.applications.is_empty());
        assert!(snapshot.workloads.is_empty());
        assert_eq!(snapshot.progress, 10);
        assert_eq!(snapshot.phase, PHASE_INITIALIZING);
        assert_eq!(store.snapshot().phase, PHASE_INITIALIZING);
    }

    #[tokio::test]
    async fn test_each_tick_fully_replaces_listings() {
        let source = Arc::new(FakeSource::default());
        source.set(Some(synced_apps()), Some(vec![pod("monitoring", "prom")]));
        let (collector, store) = collector(source.clone());
        collector.tick().await;
        assert_eq!(store.snapshot().applications.len(), 2);

        source.set(None, Some(Vec::new()));
        collector.tick().await;
        let snapshot = store.snapshot();
        assert!(snapshot.applications.is_empty());
        assert!(snapshot.workloads.is_empty());
        assert_eq!(snapshot.progress, 10);
    }

    #[tokio::test]
    async fn test_spawned_collector_publishes_first_tick_immediately() {
        let source = Arc::new(FakeSource::default());
        source.set(Some(synced_apps()), Some(vec![pod("argocd", "server")]));
        let (collector, store) = collector(source);
        assert_eq!(store.snapshot().phase, INITIAL_PHASE);

        let handle = collector.spawn();
        for _ in 0..100 {
            if store.snapshot().phase != INITIAL_PHASE {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.abort();

        assert_eq!(store.snapshot().phase, PHASE_COMPLETE);
    }
}
