//! Memory collector for `/proc/meminfo`.

use std::path::PathBuf;

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::procfs::parser::parse_meminfo;
use crate::collector::traits::{FileSystem, MetricCollector};
use crate::model::MemoryInfo;

/// Reads total, free and available memory in KiB.
///
/// Values are returned in kernel units; scaling is left to the caller.
pub struct MemoryCollector<F: FileSystem> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> MemoryCollector<F> {
    /// Creates a memory collector reading `<proc_path>/meminfo`.
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: proc_path.into().join("meminfo"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn collect_memory(&self) -> Result<MemoryInfo, CollectError> {
        let content = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| CollectError::read(&self.path, e))?;
        let info = parse_meminfo(&content).map_err(|e| CollectError::parse(&self.path, e))?;
        debug!(
            total_kb = info.total,
            free_kb = info.free,
            available_kb = info.available,
            "collected meminfo"
        );
        Ok(info)
    }
}

impl<F: FileSystem> MetricCollector for MemoryCollector<F> {
    type Output = MemoryInfo;

    fn collect(&self) -> Result<MemoryInfo, CollectError> {
        self.collect_memory()
    }
}
