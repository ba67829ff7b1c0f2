//! Snapshot source abstraction.
//!
//! The HTTP layer only sees `dyn SnapshotProvider`, so it can be driven by
//! the real collector or by a fake in tests.

use crate::collector::traits::{FileSystem, StatFs};
use crate::collector::{CollectError, Collector, CollectorTiming};
use crate::model::Snapshot;

/// Produces one fresh snapshot per call.
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(&self) -> Result<Snapshot, CollectError>;

    /// Like [`snapshot`](Self::snapshot), with per-phase timing when the
    /// provider measures it.
    fn snapshot_timed(&self) -> Result<(Snapshot, Option<CollectorTiming>), CollectError> {
        self.snapshot().map(|s| (s, None))
    }
}

impl<F: FileSystem, S: StatFs> SnapshotProvider for Collector<F, S> {
    fn snapshot(&self) -> Result<Snapshot, CollectError> {
        self.build_snapshot()
    }

    fn snapshot_timed(&self) -> Result<(Snapshot, Option<CollectorTiming>), CollectError> {
        self.build_snapshot_timed().map(|(s, t)| (s, Some(t)))
    }
}
