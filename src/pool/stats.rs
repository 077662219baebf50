//! Pool statistics
//!
//! Counters are observational only; reconciliation never reads them.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Statistics for the session pool
#[derive(Debug, Default)]
pub struct PoolStats {
    /// Total sessions created
    pub total_created: AtomicUsize,
    /// Total sessions handed to callers
    pub total_claimed: AtomicUsize,
    /// Total pooled sessions destroyed
    pub total_destroyed: AtomicUsize,
    /// Sessions currently in the pool
    pub pooled_count: AtomicUsize,
}

impl PoolStats {
    /// Create new pool stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a session creation
    pub fn record_created(&self) {
        self.total_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a session claim
    pub fn record_claimed(&self) {
        self.total_claimed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record destruction of `count` pooled sessions
    pub fn record_destroyed(&self, count: usize) {
        self.total_destroyed.fetch_add(count, Ordering::Relaxed);
    }

    /// Update pooled count
    pub fn set_pooled_count(&self, count: usize) {
        self.pooled_count.store(count, Ordering::Relaxed);
    }

    /// Get current stats snapshot
    pub fn snapshot(&self) -> PoolStatsSnapshot {
        PoolStatsSnapshot {
            total_created: self.total_created.load(Ordering::Relaxed),
            total_claimed: self.total_claimed.load(Ordering::Relaxed),
            total_destroyed: self.total_destroyed.load(Ordering::Relaxed),
            pooled_count: self.pooled_count.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of pool statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStatsSnapshot {
    pub total_created: usize,
    pub total_claimed: usize,
    pub total_destroyed: usize,
    pub pooled_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_stats_new() {
        let stats = PoolStats::new();
        assert_eq!(stats.snapshot(), PoolStatsSnapshot::default());
    }

    #[test]
    fn test_pool_stats_record() {
        let stats = PoolStats::new();
        stats.record_created();
        stats.record_created();
        stats.record_claimed();
        stats.record_destroyed(3);
        stats.set_pooled_count(1);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_created, 2);
        assert_eq!(snapshot.total_claimed, 1);
        assert_eq!(snapshot.total_destroyed, 3);
        assert_eq!(snapshot.pooled_count, 1);
    }
}
