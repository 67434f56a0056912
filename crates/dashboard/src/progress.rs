// crates/dashboard/src/progress.rs
//! Deployment progress estimation.
//!
//! Pure functions of (applications, workloads): no clock, no shared state.
//! The score is a weighted sum of four completion ratios:
//!
//! | Ratio                      | Weight |
//! |----------------------------|--------|
//! | applications Synced        | 40     |
//! | applications Healthy       | 30     |
//! | workloads Running          | 20     |
//! | workloads fully ready      | 10     |
//!
//! The result is floored and capped at 100.

use serde::{Deserialize, Serialize};

use crate::model::{HealthStatus, ManagedApplication, PodPhase, SyncStatus, WorkloadInstance};

/// Reported while no application has been discovered yet, so the bar never
/// sits at zero during bootstrap.
pub const BOOTSTRAP_PROGRESS: u8 = 10;

const SYNCED_WEIGHT: u64 = 40;
const HEALTHY_WEIGHT: u64 = 30;
const RUNNING_WEIGHT: u64 = 20;
const READY_WEIGHT: u64 = 10;

pub const PHASE_INITIALIZING: &str = "Initializing ArgoCD";
pub const PHASE_SYNCING: &str = "Syncing Applications";
pub const PHASE_WAITING: &str = "Waiting for Ready";
pub const PHASE_COMPLETE: &str = "Deployment Complete";

/// Counts behind the progress score, also served by `/api/debug` and badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStats {
    pub total_apps: usize,
    pub synced_apps: usize,
    pub healthy_apps: usize,
    pub total_pods: usize,
    pub running_pods: usize,
    pub ready_pods: usize,
}

impl DeploymentStats {
    pub fn collect(applications: &[ManagedApplication], workloads: &[WorkloadInstance]) -> Self {
        Self {
            total_apps: applications.len(),
            synced_apps: applications
                .iter()
                .filter(|a| a.sync == SyncStatus::Synced)
                .count(),
            healthy_apps: applications
                .iter()
                .filter(|a| a.health == HealthStatus::Healthy)
                .count(),
            total_pods: workloads.len(),
            running_pods: workloads
                .iter()
                .filter(|w| w.phase == PodPhase::Running)
                .count(),
            ready_pods: workloads.iter().filter(|w| w.is_ready()).count(),
        }
    }
}

/// Completion score in `0..=100`.
pub fn compute_progress(applications: &[ManagedApplication], workloads: &[WorkloadInstance]) -> u8 {
    if applications.is_empty() {
        return BOOTSTRAP_PROGRESS;
    }
    let stats = DeploymentStats::collect(applications, workloads);
    weighted_score(&stats).min(100) as u8
}

/// Floor of the weighted score, computed over a common denominator so that
/// exact fractions (e.g. 0.5) never lose a point to float rounding.
fn weighted_score(stats: &DeploymentStats) -> u64 {
    let apps = stats.total_apps as u64;
    let app_points =
        SYNCED_WEIGHT * stats.synced_apps as u64 + HEALTHY_WEIGHT * stats.healthy_apps as u64;

    if stats.total_pods == 0 {
        return app_points / apps;
    }

    let pods = stats.total_pods as u64;
    let pod_points =
        RUNNING_WEIGHT * stats.running_pods as u64 + READY_WEIGHT * stats.ready_pods as u64;
    (app_points * pods + pod_points * apps) / (apps * pods)
}

/// Phase label for a progress value. First matching rule wins; a pending
/// workload overrides the late-stage labels regardless of score.
pub fn compute_phase(progress: u8, workloads: &[WorkloadInstance]) -> String {
    if progress < 20 {
        return PHASE_INITIALIZING.to_string();
    }
    if progress < 70 {
        return PHASE_SYNCING.to_string();
    }
    if workloads.iter().any(|w| w.phase == PodPhase::Pending) {
        let running = workloads
            .iter()
            .filter(|w| w.phase == PodPhase::Running)
            .count();
        return format!("Starting Pods ({running}/{} running)", workloads.len());
    }
    if progress < 100 {
        return PHASE_WAITING.to_string();
    }
    PHASE_COMPLETE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReadyRatio;
    use pretty_assertions::assert_eq;

    fn app(name: &str, sync: SyncStatus, health: HealthStatus) -> ManagedApplication {
        ManagedApplication::new(name, sync, health)
    }

    fn pod(name: &str, phase: PodPhase, ready: u32, total: u32) -> WorkloadInstance {
        WorkloadInstance::new("ml-inference", name, phase, ReadyRatio::new(ready, total))
    }

    fn healthy_apps() -> Vec<ManagedApplication> {
        vec![
            app("ml-inference", SyncStatus::Synced, HealthStatus::Healthy),
            app("monitoring", SyncStatus::Synced, HealthStatus::Healthy),
        ]
    }

    fn running_pods() -> Vec<WorkloadInstance> {
        vec![
            pod("ml-api-abc123", PodPhase::Running, 1, 1),
            pod("prometheus-xyz789", PodPhase::Running, 1, 1),
            pod("argocd-server-def456", PodPhase::Running, 1, 1),
        ]
    }

    #[test]
    fn test_progress_no_apps_is_bootstrap_floor() {
        assert_eq!(compute_progress(&[], &[]), 10);
        assert_eq!(compute_progress(&[], &running_pods()), 10);
    }

    #[test]
    fn test_progress_all_complete() {
        assert_eq!(compute_progress(&healthy_apps(), &running_pods()), 100);
    }

    #[test]
    fn test_progress_mixed() {
        let apps = vec![
            app("app1", SyncStatus::Synced, HealthStatus::Healthy),
            app("app2", SyncStatus::OutOfSync, HealthStatus::Degraded),
        ];
        let pods = vec![
            pod("pod1", PodPhase::Running, 1, 1),
            pod("pod2", PodPhase::Pending, 0, 1),
        ];
        assert_eq!(compute_progress(&apps, &pods), 50);
    }

    #[test]
    fn test_progress_without_workloads_caps_at_app_weights() {
        assert_eq!(compute_progress(&healthy_apps(), &[]), 70);

        let apps = vec![
            app("app1", SyncStatus::Synced, HealthStatus::Healthy),
            app("app2", SyncStatus::OutOfSync, HealthStatus::Progressing),
        ];
        let progress = compute_progress(&apps, &[]);
        assert!(0 < progress && progress < 100);
        assert_eq!(progress, 35);
    }

    #[test]
    fn test_progress_truncates_instead_of_rounding() {
        // 40/3 + 30/3 = 23.33.. with no pods
        let apps = vec![
            app("a", SyncStatus::Synced, HealthStatus::Healthy),
            app("b", SyncStatus::OutOfSync, HealthStatus::Degraded),
            app("c", SyncStatus::Unknown, HealthStatus::Unknown),
        ];
        assert_eq!(compute_progress(&apps, &[]), 23);

        // 40 + 30 + 20*(2/3) + 10*(3/3) = 93.33..
        let pods = vec![
            pod("p1", PodPhase::Running, 1, 1),
            pod("p2", PodPhase::Running, 1, 1),
            pod("p3", PodPhase::Pending, 1, 1),
        ];
        assert_eq!(compute_progress(&healthy_apps(), &pods), 93);
    }

    #[test]
    fn test_progress_always_in_range() {
        let statuses = [SyncStatus::Synced, SyncStatus::OutOfSync, SyncStatus::Unknown];
        let healths = [HealthStatus::Healthy, HealthStatus::Degraded, HealthStatus::Unknown];
        let phases = [PodPhase::Running, PodPhase::Pending, PodPhase::Failed];

        for n_apps in 0..4 {
            for n_pods in 0..4 {
                let apps: Vec<_> = (0..n_apps)
                    .map(|i| app("a", statuses[i % 3], healths[(i + 1) % 3]))
                    .collect();
                let pods: Vec<_> = (0..n_pods)
                    .map(|i| pod("p", phases[i % 3], (i % 2) as u32, 1))
                    .collect();
                let progress = compute_progress(&apps, &pods);
                assert!(progress <= 100, "{n_apps} apps / {n_pods} pods -> {progress}");
            }
        }
    }

    #[test]
    fn test_progress_is_idempotent() {
        let apps = healthy_apps();
        let pods = running_pods();
        assert_eq!(compute_progress(&apps, &pods), compute_progress(&apps, &pods));
        assert_eq!(compute_phase(85, &pods), compute_phase(85, &pods));
    }

    #[test]
    fn test_phase_rules() {
        assert_eq!(compute_phase(15, &[]), PHASE_INITIALIZING);
        assert_eq!(compute_phase(50, &[]), PHASE_SYNCING);
        assert_eq!(compute_phase(85, &running_pods()), PHASE_WAITING);
        assert_eq!(compute_phase(100, &running_pods()), PHASE_COMPLETE);
        assert_eq!(compute_phase(100, &[]), PHASE_COMPLETE);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(compute_phase(19, &[]), PHASE_INITIALIZING);
        assert_eq!(compute_phase(20, &[]), PHASE_SYNCING);
        assert_eq!(compute_phase(69, &[]), PHASE_SYNCING);
        assert_eq!(compute_phase(70, &[]), PHASE_WAITING);
        assert_eq!(compute_phase(99, &[]), PHASE_WAITING);
    }

    #[test]
    fn test_phase_pending_pod_overrides_late_labels() {
        let pods = vec![
            pod("ml-api-abc123", PodPhase::Running, 1, 1),
            pod("prometheus-xyz789", PodPhase::Pending, 0, 1),
        ];
        assert_eq!(compute_phase(85, &pods), "Starting Pods (1/2 running)");
        assert_eq!(compute_phase(100, &pods), "Starting Pods (1/2 running)");
        // Early phases still win over the pending check
        assert_eq!(compute_phase(50, &pods), PHASE_SYNCING);
    }

    #[test]
    fn test_stats_empty_inputs() {
        assert_eq!(DeploymentStats::collect(&[], &[]), DeploymentStats::default());
    }

    #[test]
    fn test_stats_mixed_health() {
        let apps = vec![
            app("app1", SyncStatus::Synced, HealthStatus::Healthy),
            app("app2", SyncStatus::OutOfSync, HealthStatus::Degraded),
        ];
        let pods = vec![
            pod("pod1", PodPhase::Running, 1, 1),
            pod("pod2", PodPhase::Pending, 0, 1),
        ];
        assert_eq!(
            DeploymentStats::collect(&apps, &pods),
            DeploymentStats {
                total_apps: 2,
                synced_apps: 1,
                healthy_apps: 1,
                total_pods: 2,
                running_pods: 1,
                ready_pods: 1,
            }
        );
    }
}
