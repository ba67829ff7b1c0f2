//! Snapshot assembler combining the memory, CPU and disk collectors.
//!
//! The `Collector` struct provides a single entry point that gathers all
//! three metrics, applies unit conversion once and returns a `Snapshot`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::disk::{DEFAULT_MOUNT_PATH, DiskCollector, DiskErrorPolicy};
use crate::collector::procfs::{CpuCollector, MemoryCollector};
use crate::collector::traits::{FileSystem, MetricCollector, StatFs};
use crate::model::{DiskStatus, MemoryInfo, Snapshot};
use crate::units::{bytes_to_gb, kb_to_gb_scaled};

/// Default proc root.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// How memory fields are placed into the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemoryLayout {
    /// `free` carries free memory and `available` carries available memory.
    #[default]
    Corrected,
    /// Output-compatible with v1 dashboards: `free` carries available
    /// memory and `available` carries total memory.
    Legacy,
}

impl MemoryLayout {
    pub fn apply(self, mem: MemoryInfo) -> MemoryInfo {
        match self {
            MemoryLayout::Corrected => mem,
            MemoryLayout::Legacy => MemoryInfo {
                total: mem.total,
                free: mem.available,
                available: mem.total,
            },
        }
    }
}

/// Timing information for each collector phase.
///
/// Used for debugging and performance monitoring.
#[derive(Debug, Clone, Default)]
pub struct CollectorTiming {
    /// Total snapshot collection time.
    pub total: Duration,
    /// Time to run `statvfs` on the mount point.
    pub disk: Duration,
    /// Time to read and parse `/proc/stat`.
    pub cpu: Duration,
    /// Time to read and parse `/proc/meminfo`.
    pub meminfo: Duration,
}

/// Main collector that gathers all host metrics.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
pub struct Collector<F: FileSystem, S: StatFs> {
    memory: MemoryCollector<F>,
    cpu: CpuCollector<F>,
    disk: DiskCollector<S>,
    memory_layout: MemoryLayout,
}

impl<F: FileSystem + Clone, S: StatFs> Collector<F, S> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `statfs` - Filesystem-statistics implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    ///
    /// Disk usage is reported for [`DEFAULT_MOUNT_PATH`] until
    /// [`with_mount_path`](Self::with_mount_path) says otherwise.
    pub fn new(fs: F, statfs: S, proc_path: impl Into<PathBuf>) -> Self {
        let proc_path = proc_path.into();
        Self {
            memory: MemoryCollector::new(fs.clone(), &proc_path),
            cpu: CpuCollector::new(fs, &proc_path),
            disk: DiskCollector::new(statfs, DEFAULT_MOUNT_PATH),
            memory_layout: MemoryLayout::default(),
        }
    }
}

impl<F: FileSystem, S: StatFs> Collector<F, S> {
    /// Sets the mount point whose usage is reported.
    pub fn with_mount_path(mut self, mount_path: impl Into<PathBuf>) -> Self {
        self.disk = self.disk.with_mount_path(mount_path);
        self
    }

    /// Sets the behavior on `statvfs` failure.
    pub fn with_disk_policy(mut self, policy: DiskErrorPolicy) -> Self {
        self.disk = self.disk.with_policy(policy);
        self
    }

    pub fn with_memory_layout(mut self, layout: MemoryLayout) -> Self {
        self.memory_layout = layout;
        self
    }

    pub fn memory_layout(&self) -> MemoryLayout {
        self.memory_layout
    }

    pub fn disk_collector(&self) -> &DiskCollector<S> {
        &self.disk
    }

    /// Collects a complete host snapshot.
    ///
    /// Fails if memory or CPU collection fails; disk failures follow the
    /// configured [`DiskErrorPolicy`].
    pub fn build_snapshot(&self) -> Result<Snapshot, CollectError> {
        self.build_snapshot_timed().map(|(snapshot, _)| snapshot)
    }

    /// Like [`build_snapshot`](Self::build_snapshot), also returning per-phase timing.
    pub fn build_snapshot_timed(&self) -> Result<(Snapshot, CollectorTiming), CollectError> {
        let total_start = Instant::now();
        let mut timing = CollectorTiming::default();

        let start = Instant::now();
        let disk = self.disk.collect()?;
        timing.disk = start.elapsed();

        let start = Instant::now();
        let cpu = self.cpu.collect()?;
        timing.cpu = start.elapsed();

        let start = Instant::now();
        let mem = self.memory.collect()?;
        timing.meminfo = start.elapsed();

        let snapshot = Snapshot {
            mem: self.memory_layout.apply(MemoryInfo {
                total: kb_to_gb_scaled(mem.total),
                free: kb_to_gb_scaled(mem.free),
                available: kb_to_gb_scaled(mem.available),
            }),
            cpu,
            disk: DiskStatus {
                all: bytes_to_gb(disk.all),
                used: bytes_to_gb(disk.used),
                free: bytes_to_gb(disk.free),
            },
        };

        timing.total = total_start.elapsed();
        debug!(
            total_us = timing.total.as_micros() as u64,
            disk_us = timing.disk.as_micros() as u64,
            cpu_us = timing.cpu.as_micros() as u64,
            meminfo_us = timing.meminfo.as_micros() as u64,
            "snapshot collected"
        );

        Ok((snapshot, timing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FsStats;
    use crate::collector::{MockFs, MockStatFs};
    use crate::model::CpuLoad;

    fn typical_collector() -> Collector<MockFs, MockStatFs> {
        Collector::new(
            MockFs::typical_system(),
            MockStatFs::typical_root(),
            DEFAULT_PROC_PATH,
        )
    }

    #[test]
    fn test_build_snapshot_typical() {
        let snapshot = typical_collector().build_snapshot().unwrap();

        assert_eq!(
            snapshot.mem,
            MemoryInfo {
                total: 16,
                free: 8,
                available: 12
            }
        );
        assert_eq!(
            snapshot.cpu,
            CpuLoad {
                user: 0.01,
                system: 0.003,
                idle: 0.08
            }
        );
        assert_eq!(
            snapshot.disk,
            DiskStatus {
                all: 100,
                used: 60,
                free: 40
            }
        );
    }

    #[test]
    fn test_build_snapshot_is_deterministic() {
        let collector = typical_collector();
        let first = collector.build_snapshot().unwrap();
        let second = collector.build_snapshot().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_snapshot_legacy_layout() {
        let snapshot = typical_collector()
            .with_memory_layout(MemoryLayout::Legacy)
            .build_snapshot()
            .unwrap();

        assert_eq!(snapshot.mem.total, 16);
        assert_eq!(snapshot.mem.free, 12);
        assert_eq!(snapshot.mem.available, 16);
    }

    #[test]
    fn test_build_snapshot_minimal_values_truncate() {
        let mut statfs = MockStatFs::new();
        statfs.add_mount(
            "/",
            FsStats {
                blocks: 100,
                blocks_free: 40,
                block_size: 1024,
            },
        );
        let snapshot = Collector::new(MockFs::minimal_system(), statfs, "/proc")
            .build_snapshot()
            .unwrap();

        assert_eq!(snapshot.mem, MemoryInfo::default());
        assert_eq!(snapshot.cpu.user, 1.0);
        assert_eq!(snapshot.cpu.system, 2.0);
        assert_eq!(snapshot.cpu.idle, 3.0);
        assert!(snapshot.disk.is_zero());
    }

    #[test]
    fn test_build_snapshot_custom_mount() {
        let mut statfs = MockStatFs::typical_root();
        statfs.add_mount(
            "/data",
            FsStats {
                blocks: 2 * 1024 * 1024,
                blocks_free: 1024 * 1024,
                block_size: 1024,
            },
        );
        let collector = Collector::new(MockFs::typical_system(), statfs, "/proc");
        assert_eq!(
            collector.disk_collector().mount_path(),
            std::path::Path::new(DEFAULT_MOUNT_PATH)
        );
        let collector = collector.with_mount_path("/data");
        assert_eq!(
            collector.disk_collector().mount_path(),
            std::path::Path::new("/data")
        );

        let snapshot = collector.build_snapshot().unwrap();
        assert_eq!(snapshot.disk.all, 2);
        assert_eq!(snapshot.disk.free, 1);
        assert_eq!(snapshot.disk.used, 1);
    }

    #[test]
    fn test_disk_failure_falls_back_to_zero() {
        let snapshot = Collector::new(MockFs::typical_system(), MockStatFs::new(), "/proc")
            .build_snapshot()
            .unwrap();
        assert!(snapshot.disk.is_zero());
        assert_eq!(snapshot.mem.total, 16);
    }

    #[test]
    fn test_disk_failure_strict_propagates() {
        let err = Collector::new(MockFs::typical_system(), MockStatFs::new(), "/proc")
            .with_disk_policy(DiskErrorPolicy::Strict)
            .build_snapshot()
            .unwrap_err();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_no_partial_snapshot_on_memory_failure() {
        let mut fs = MockFs::typical_system();
        fs.remove_file("/proc/meminfo");
        let err = Collector::new(fs, MockStatFs::typical_root(), "/proc")
            .build_snapshot()
            .unwrap_err();
        assert!(matches!(err, CollectError::Io { .. }));
    }

    #[test]
    fn test_no_partial_snapshot_on_parse_failure() {
        let err = Collector::new(MockFs::malformed_stat(), MockStatFs::typical_root(), "/proc")
            .build_snapshot()
            .unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));

        let err = Collector::new(
            MockFs::malformed_meminfo(),
            MockStatFs::typical_root(),
            "/proc",
        )
        .build_snapshot()
        .unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
    }

    #[test]
    fn test_timing_is_recorded() {
        let (_, timing) = typical_collector().build_snapshot_timed().unwrap();
        assert!(timing.total >= timing.disk);
        assert!(timing.total >= timing.meminfo);
    }

    #[test]
    fn test_memory_layout_apply() {
        let mem = MemoryInfo {
            total: 3,
            free: 1,
            available: 2,
        };
        assert_eq!(MemoryLayout::Corrected.apply(mem), mem);
        assert_eq!(
            MemoryLayout::Legacy.apply(mem),
            MemoryInfo {
                total: 3,
                free: 2,
                available: 3
            }
        );
    }
}
