//! Abstractions over the kernel interfaces the collectors read.
//!
//! `FileSystem` covers the `/proc` pseudo-files, `StatFs` covers the
//! filesystem-statistics call. Both have real and in-memory implementations
//! so collectors can be tested without a Linux host.

use std::io;
use std::path::Path;

use crate::collector::CollectError;

/// A single source of metrics, read once per call.
///
/// Implemented uniformly by the memory, CPU and disk collectors so the
/// snapshot assembler (and tests) can treat them alike.
pub trait MetricCollector {
    type Output;

    fn collect(&self) -> Result<Self::Output, CollectError>;
}

/// Abstraction for reading pseudo-files.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Block counts for one filesystem, as returned by `statvfs(3)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStats {
    /// Total data blocks.
    pub blocks: u64,
    /// Free blocks.
    pub blocks_free: u64,
    /// Size of one block in bytes.
    pub block_size: u64,
}

/// Abstraction for the filesystem-statistics system call.
pub trait StatFs: Send + Sync {
    fn statfs(&self, path: &Path) -> io::Result<FsStats>;
}

/// Calls `statvfs(3)` on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStatFs;

impl RealStatFs {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl StatFs for RealStatFs {
    fn statfs(&self, path: &Path) -> io::Result<FsStats> {
        let stats = nix::sys::statvfs::statvfs(path).map_err(io::Error::from)?;
        // f_blocks and f_bfree are counted in f_frsize units.
        Ok(FsStats {
            blocks: stats.blocks() as u64,
            blocks_free: stats.blocks_free() as u64,
            block_size: stats.fragment_size() as u64,
        })
    }
}

#[cfg(not(unix))]
impl StatFs for RealStatFs {
    fn statfs(&self, _path: &Path) -> io::Result<FsStats> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "statvfs is not available on this platform",
        ))
    }
}
