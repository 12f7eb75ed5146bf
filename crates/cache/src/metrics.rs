//! Operation counters for a jar cache instance.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking how often the cache agreed or disagreed with the jar.
///
/// A `hit` is a sync check that matched; a `miss` is the first touch of a
/// key the cache had no entry for; a `resync` is an entry that existed but
/// no longer matched the jar and had to be refreshed.
#[derive(Debug, Default)]
pub struct JarStats {
    hits: AtomicU64,
    misses: AtomicU64,
    resyncs: AtomicU64,
    writes: AtomicU64,
    removals: AtomicU64,
}

impl JarStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resync(&self) {
        self.resyncs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of sync checks that matched.
    pub fn hit_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        let checks = snapshot.hits + snapshot.misses + snapshot.resyncs;
        if checks == 0 {
            0.0
        } else {
            snapshot.hits as f64 / checks as f64
        }
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            resyncs: self.resyncs.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of jar cache counters at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub resyncs: u64,
    pub writes: u64,
    pub removals: u64,
}
