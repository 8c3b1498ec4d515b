//! Metrics collection for the sync loop.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Counters for sync engine activity. Cheap to clone; clones share counters.
#[derive(Debug, Clone, Default)]
pub struct SyncMetrics {
    inner: Arc<SyncMetricsInner>,
}

#[derive(Debug, Default)]
struct SyncMetricsInner {
    ticks: AtomicU64,
    fetch_failures: AtomicU64,
    publishes: AtomicU64,
    publish_failures: AtomicU64,
    last_publish: parking_lot::Mutex<Option<Instant>>,
}

impl SyncMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tick.
    pub fn record_tick(&self) {
        self.inner.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a fetch that came back offline.
    pub fn record_fetch_failure(&self) {
        self.inner.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful publish made at `at`.
    pub fn record_publish(&self, at: Instant) {
        self.inner.publishes.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_publish.lock() = Some(at);
    }

    /// Records a failed publish.
    pub fn record_publish_failure(&self) {
        self.inner.publish_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> SyncMetricsSnapshot {
        SyncMetricsSnapshot {
            ticks: self.inner.ticks.load(Ordering::Relaxed),
            fetch_failures: self.inner.fetch_failures.load(Ordering::Relaxed),
            publishes: self.inner.publishes.load(Ordering::Relaxed),
            publish_failures: self.inner.publish_failures.load(Ordering::Relaxed),
            seconds_since_publish: self
                .inner
                .last_publish
                .lock()
                .map(|at| Instant::now().saturating_duration_since(at).as_secs()),
        }
    }
}

/// Serializable view of [`SyncMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncMetricsSnapshot {
    /// Ticks run
    pub ticks: u64,
    /// Ticks whose fetch came back offline
    pub fetch_failures: u64,
    /// Successful publishes
    pub publishes: u64,
    /// Failed publishes
    pub publish_failures: u64,
    /// Seconds since the last successful publish
    pub seconds_since_publish: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_publish_age_uses_recorded_instant() {
        let metrics = SyncMetrics::new();
        assert_eq!(metrics.snapshot().seconds_since_publish, None);

        let Some(earlier) = Instant::now().checked_sub(Duration::from_secs(90)) else {
            return;
        };
        metrics.record_publish(earlier);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.publishes, 1);
        assert!(snapshot.seconds_since_publish.unwrap() >= 90);
    }

    #[test]
    fn test_future_publish_instant_reads_as_zero_age() {
        let metrics = SyncMetrics::new();
        metrics.record_publish(Instant::now() + Duration::from_secs(300));

        assert_eq!(metrics.snapshot().seconds_since_publish, Some(0));
    }
}
