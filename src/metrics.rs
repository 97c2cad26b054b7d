//! Routing metrics and observability.
//!
//! Counters for how requests were routed. Owned by the router instance that
//! records into them, so tests get isolated metrics for free.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation routing outcomes.
#[derive(Debug, Default)]
pub struct RouteMetrics {
    /// Requests where source == target, returned without touching the engine
    identity: AtomicUsize,

    /// Requests served by a single direct hop
    direct: AtomicUsize,

    /// Requests served by two hops through the pivot language
    pivot: AtomicUsize,

    /// Requests that failed with any routing or engine error
    failed: AtomicUsize,
}

impl RouteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_identity(&self) {
        self.identity.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_direct(&self) {
        self.direct.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pivot(&self) {
        self.pivot.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn identity(&self) -> usize {
        self.identity.load(Ordering::Relaxed)
    }

    pub fn direct(&self) -> usize {
        self.direct.load(Ordering::Relaxed)
    }

    pub fn pivot(&self) -> usize {
        self.pivot.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Generate a report, folding in the current cache size.
    pub fn report(&self, cached_pairs: usize) -> MetricsReport {
        let identity = self.identity();
        let direct = self.direct();
        let pivot = self.pivot();
        let failed = self.failed();

        let total = identity + direct + pivot + failed;
        let success_rate = if total > 0 {
            ((total - failed) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            identity_translations: identity,
            direct_translations: direct,
            pivot_translations: pivot,
            failed_translations: failed,
            success_rate,
            cached_pairs,
        }
    }
}

/// Snapshot of routing statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub identity_translations: usize,
    pub direct_translations: usize,
    pub pivot_translations: usize,
    pub failed_translations: usize,
    /// Share of requests that succeeded, as a percentage (0-100)
    pub success_rate: f64,
    /// Language pairs currently confirmed usable
    pub cached_pairs: usize,
}
