//! CPU collector for the aggregate line of `/proc/stat`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::procfs::parser::parse_cpu_times;
use crate::collector::traits::{FileSystem, MetricCollector};
use crate::model::{CpuLoad, CpuTimes};
use crate::units::normalize_cpu_ticks;

/// Reads user/system/idle time since boot.
///
/// `nice` is parsed but not surfaced.
pub struct CpuCollector<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> CpuCollector<F> {
    /// Creates a CPU collector reading `<proc_path>/stat`.
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self::with_path(fs, proc_path.into().join("stat"))
    }

    /// Creates a CPU collector reading an explicit stat file.
    pub fn with_path(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw counters without normalization.
    pub fn collect_times(&self) -> Result<CpuTimes, CollectError> {
        let content = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| CollectError::read(&self.path, e))?;
        parse_cpu_times(&content).map_err(|e| CollectError::parse(&self.path, e))
    }

    pub fn collect_cpu(&self) -> Result<CpuLoad, CollectError> {
        let times = self.collect_times()?;
        debug!(
            user = times.user,
            nice = times.nice,
            system = times.system,
            idle = times.idle,
            "collected cpu stat"
        );
        Ok(CpuLoad {
            user: normalize_cpu_ticks(times.user),
            system: normalize_cpu_ticks(times.system),
            idle: normalize_cpu_ticks(times.idle),
        })
    }
}

impl<F: FileSystem> MetricCollector for CpuCollector<F> {
    type Output = CpuLoad;

    fn collect(&self) -> Result<CpuLoad, CollectError> {
        self.collect_cpu()
    }
}
