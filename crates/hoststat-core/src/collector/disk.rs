//! Disk collector built on the filesystem-statistics call.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collector::CollectError;
use crate::collector::traits::{MetricCollector, StatFs};
use crate::model::DiskStatus;

/// Mount point reported when none is configured.
pub const DEFAULT_MOUNT_PATH: &str = "/";

/// What the disk collector does when `statvfs` fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiskErrorPolicy {
    /// Log a warning and report an all-zero [`DiskStatus`].
    ///
    /// An unreachable mount point is then indistinguishable from an empty
    /// filesystem.
    #[default]
    ZeroFallback,
    /// Surface the failure as [`CollectError::Io`].
    Strict,
}

/// Reports total/used/free bytes for one mount point.
pub struct DiskCollector<S: StatFs> {
    statfs: S,
    mount_path: PathBuf,
    policy: DiskErrorPolicy,
}

impl<S: StatFs> DiskCollector<S> {
    pub fn new(statfs: S, mount_path: impl Into<PathBuf>) -> Self {
        Self {
            statfs,
            mount_path: mount_path.into(),
            policy: DiskErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DiskErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_mount_path(mut self, mount_path: impl Into<PathBuf>) -> Self {
        self.mount_path = mount_path.into();
        self
    }

    pub fn mount_path(&self) -> &Path {
        &self.mount_path
    }

    pub fn policy(&self) -> DiskErrorPolicy {
        self.policy
    }

    /// Returns usage in bytes for the configured mount point.
    pub fn collect_disk(&self) -> Result<DiskStatus, CollectError> {
        match self.statfs.statfs(&self.mount_path) {
            Ok(stats) => {
                let status =
                    DiskStatus::from_blocks(stats.blocks, stats.blocks_free, stats.block_size);
                debug!(
                    mount = %self.mount_path.display(),
                    all = status.all,
                    used = status.used,
                    free = status.free,
                    "collected disk usage"
                );
                Ok(status)
            }
            Err(e) => match self.policy {
                DiskErrorPolicy::ZeroFallback => {
                    warn!(
                        mount = %self.mount_path.display(),
                        error = %e,
                        "statvfs failed, reporting zero disk usage"
                    );
                    Ok(DiskStatus::default())
                }
                DiskErrorPolicy::Strict => Err(CollectError::io(&self.mount_path, e)),
            },
        }
    }
}

impl<S: StatFs> MetricCollector for DiskCollector<S> {
    type Output = DiskStatus;

    fn collect(&self) -> Result<DiskStatus, CollectError> {
        self.collect_disk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockStatFs;
    use crate::collector::traits::FsStats;

    fn statfs_100_40_1024() -> MockStatFs {
        let mut statfs = MockStatFs::new();
        statfs.add_mount(
            "/",
            FsStats {
                blocks: 100,
                blocks_free: 40,
                block_size: 1024,
            },
        );
        statfs
    }

    #[test]
    fn test_collect_disk_bytes() {
        let disk = DiskCollector::new(statfs_100_40_1024(), "/")
            .collect()
            .unwrap();
        assert_eq!(
            disk,
            DiskStatus {
                all: 102_400,
                used: 61_440,
                free: 40_960
            }
        );
        assert_eq!(disk.used + disk.free, disk.all);
    }

    #[test]
    fn test_unreachable_mount_falls_back_to_zero() {
        let collector = DiskCollector::new(statfs_100_40_1024(), "/mnt/missing");
        assert_eq!(collector.policy(), DiskErrorPolicy::ZeroFallback);

        let disk = collector.collect().unwrap();
        assert!(disk.is_zero());
    }

    #[test]
    fn test_unreachable_mount_strict() {
        let collector = DiskCollector::new(statfs_100_40_1024(), "/mnt/missing")
            .with_policy(DiskErrorPolicy::Strict);

        match collector.collect().unwrap_err() {
            CollectError::Io { path, .. } => assert_eq!(path, PathBuf::from("/mnt/missing")),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_failing_mount_with_explicit_error() {
        let mut statfs = MockStatFs::new();
        statfs.add_failure("/data", std::io::ErrorKind::PermissionDenied);

        let disk = DiskCollector::new(statfs.clone(), "/data").collect().unwrap();
        assert!(disk.is_zero());

        let err = DiskCollector::new(statfs, "/data")
            .with_policy(DiskErrorPolicy::Strict)
            .collect()
            .unwrap_err();
        assert!(err.to_string().contains("/data"));
    }
}
