//! Store counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one record store.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    records_added: AtomicU64,
    records_updated: AtomicU64,
    records_removed: AtomicU64,
    persists_ok: AtomicU64,
    persists_failed: AtomicU64,
    corrupt_loads: AtomicU64,
}

impl StoreMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_added(&self) {
        self.records_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.records_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_removed(&self) {
        self.records_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_persists_ok(&self) {
        self.persists_ok.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_persists_failed(&self) {
        self.persists_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_corrupt_loads(&self) {
        self.corrupt_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_added: self.records_added.load(Ordering::Relaxed),
            records_updated: self.records_updated.load(Ordering::Relaxed),
            records_removed: self.records_removed.load(Ordering::Relaxed),
            persists_ok: self.persists_ok.load(Ordering::Relaxed),
            persists_failed: self.persists_failed.load(Ordering::Relaxed),
            corrupt_loads: self.corrupt_loads.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_added: u64,
    pub records_updated: u64,
    pub records_removed: u64,
    pub persists_ok: u64,
    pub persists_failed: u64,
    pub corrupt_loads: u64,
}
