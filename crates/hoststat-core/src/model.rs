//! Records produced by the collectors and the snapshot assembler.
//!
//! Every value here is created fresh for a single collection and never shared
//! between requests.

use serde::{Deserialize, Serialize};

/// Memory counters from `/proc/meminfo`, in KiB as reported by the kernel.
///
/// The kernel normally keeps `free <= total` and `available <= total`,
/// but nothing here enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub available: u64,
}

/// Raw counters from the aggregate `cpu` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

/// Cumulative CPU time since boot, normalized by
/// [`CPU_NORMALIZATION_FACTOR`](crate::units::CPU_NORMALIZATION_FACTOR).
///
/// These are absolute counters, not a rate or a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuLoad {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}

/// Filesystem usage for one mount point.
///
/// The disk collector reports bytes; a [`Snapshot`] carries whole GiB.
/// `used + free == all` up to conversion truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskStatus {
    pub all: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskStatus {
    /// Builds a status from a block count, free block count and block size.
    pub fn from_blocks(blocks: u64, blocks_free: u64, block_size: u64) -> Self {
        let all = blocks.saturating_mul(block_size);
        let free = blocks_free.saturating_mul(block_size);
        Self {
            all,
            used: all.saturating_sub(free),
            free,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// One point-in-time view of host memory, CPU and disk, after unit conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Memory scaled by `MEM_NORMALIZATION_FACTOR`.
    pub mem: MemoryInfo,
    pub cpu: CpuLoad,
    /// Disk usage in whole GiB.
    pub disk: DiskStatus,
}
