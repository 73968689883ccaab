//! Metrics registry
//!
//! - Counters only, monotonic
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one store.
///
/// Counters are atomics so they can be bumped through shared references.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    files_created: AtomicU64,
    files_deleted: AtomicU64,
    versions_branched: AtomicU64,
    snapshots_created: AtomicU64,
    rollbacks: AtomicU64,
    commands_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_files_created(&self) {
        self.files_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_files_deleted(&self) {
        self.files_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_versions_branched(&self) {
        self.versions_branched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_snapshots(&self) {
        self.snapshots_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rollbacks(&self) {
        self.rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_commands_rejected(&self) {
        self.commands_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            files_created: self.files_created.load(Ordering::Relaxed),
            files_deleted: self.files_deleted.load(Ordering::Relaxed),
            versions_branched: self.versions_branched.load(Ordering::Relaxed),
            snapshots_created: self.snapshots_created.load(Ordering::Relaxed),
            rollbacks: self.rollbacks.load(Ordering::Relaxed),
            commands_rejected: self.commands_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    pub files_created: u64,
    pub files_deleted: u64,
    pub versions_branched: u64,
    pub snapshots_created: u64,
    pub rollbacks: u64,
    pub commands_rejected: u64,
}
