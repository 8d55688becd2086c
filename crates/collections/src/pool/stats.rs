//! Statistics tracking for typed pools

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

/// Counters for one typed pool
///
/// Every acquire is either a hit (idle instance reused) or a miss (fresh
/// instance created), so `acquires == hits + misses` once no acquire is in
/// flight.
#[derive(Debug, Default)]
pub struct PoolStats {
    acquires: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    releases: AtomicU64,
    discards: AtomicU64,
    pre_warmed: AtomicU64,
    peak_idle: AtomicUsize,
}

impl PoolStats {
    pub(crate) fn record_acquire(&self, hit: bool) {
        self.acquires.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_release(&self, idle_after: usize) {
        self.releases.fetch_add(1, Ordering::Relaxed);
        self.update_peak_idle(idle_after);
    }

    pub(crate) fn record_discard(&self) {
        self.discards.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_pre_warm(&self, count: usize) {
        self.pre_warmed.fetch_add(count as u64, Ordering::Relaxed);
        self.update_peak_idle(count);
    }

    fn update_peak_idle(&self, idle: usize) {
        let mut peak = self.peak_idle.load(Ordering::Relaxed);
        while idle > peak {
            match self.peak_idle.compare_exchange_weak(
                peak,
                idle,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(current) => peak = current,
            }
        }
    }

    /// Fraction of acquires served from idle instances (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let total = self.acquires.load(Ordering::Relaxed);
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Total acquires
    pub fn total_acquires(&self) -> u64 {
        self.acquires.load(Ordering::Relaxed)
    }

    /// Total releases, including discarded ones
    pub fn total_releases(&self) -> u64 {
        self.releases.load(Ordering::Relaxed)
    }

    /// Copy of every counter
    pub fn snapshot(&self) -> PoolStatsSnapshot {
        PoolStatsSnapshot::from(self)
    }
}

/// Point-in-time copy of [`PoolStats`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoolStatsSnapshot {
    pub acquires: u64,
    pub hits: u64,
    pub misses: u64,
    pub releases: u64,
    pub discards: u64,
    pub pre_warmed: u64,
    pub peak_idle: usize,
    pub hit_rate: f64,
}

impl From<&PoolStats> for PoolStatsSnapshot {
    fn from(stats: &PoolStats) -> Self {
        Self {
            acquires: stats.acquires.load(Ordering::Relaxed),
            hits: stats.hits.load(Ordering::Relaxed),
            misses: stats.misses.load(Ordering::Relaxed),
            releases: stats.releases.load(Ordering::Relaxed),
            discards: stats.discards.load(Ordering::Relaxed),
            pre_warmed: stats.pre_warmed.load(Ordering::Relaxed),
            peak_idle: stats.peak_idle.load(Ordering::Relaxed),
            hit_rate: stats.hit_rate(),
        }
    }
}
