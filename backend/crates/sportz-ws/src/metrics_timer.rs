use crate::Metrics;

use std::time::Instant;

/// Helper for timing a fan-out
pub struct MetricsTimer {
    start: Instant,
    metrics: Metrics,
}

impl MetricsTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the elapsed time
    pub fn finish(self) {
        self.metrics.dispatch_latency(self.start.elapsed());
    }
}
