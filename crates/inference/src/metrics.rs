// crates/inference/src/metrics.rs
//! Inference service metrics for Prometheus monitoring.

use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};

/// Install the Prometheus recorder and describe the inference metrics.
pub fn init_metrics() -> bool {
    let installed = gitops_demo_observability::prometheus::install_recorder();
    if installed {
        describe_metrics();
    }
    installed
}

fn describe_metrics() {
    describe_counter!(
        "inference_requests_total",
        "Total number of inference requests"
    );
    describe_histogram!(
        "inference_request_duration_seconds",
        "Request duration in seconds"
    );
    describe_histogram!(
        "model_inference_duration_seconds",
        "Model inference duration in seconds"
    );
    describe_gauge!(
        "inference_active_requests",
        "Number of active inference requests"
    );
}

/// Outcome label for `inference_requests_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    Invalid,
}

impl RequestStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Invalid => "invalid",
        }
    }
}

/// One in-flight prediction request.
///
/// Counts toward `inference_active_requests` until dropped.
pub struct RequestTimer {
    endpoint: &'static str,
    started: Instant,
}

impl RequestTimer {
    pub fn start(endpoint: &'static str) -> Self {
        gauge!("inference_active_requests").increment(1.0);
        Self {
            endpoint,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record the outcome. Only successful requests feed the latency histogram.
    pub fn finish(self, status: RequestStatus) {
        counter!(
            "inference_requests_total",
            "endpoint" => self.endpoint,
            "status" => status.as_str()
        )
        .increment(1);
        if status == RequestStatus::Success {
            histogram!("inference_request_duration_seconds", "endpoint" => self.endpoint)
                .record(self.started.elapsed().as_secs_f64());
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        gauge!("inference_active_requests").decrement(1.0);
    }
}

/// Record one classifier call.
pub fn record_inference(duration: Duration) {
    histogram!("model_inference_duration_seconds").record(duration.as_secs_f64());
}
