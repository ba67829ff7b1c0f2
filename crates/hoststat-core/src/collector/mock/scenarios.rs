//! Pre-built mock scenarios for testing.
//!
//! These provide realistic `/proc` contents and mount statistics for
//! various host conditions.

use super::filesystem::{MockFs, MockStatFs};
use crate::collector::traits::FsStats;

const TYPICAL_MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
HugePages_Total:       0
HugePages_Free:        0
Hugepagesize:       2048 kB
";

const TYPICAL_STAT: &str = "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
";

impl MockFs {
    /// A 16 GB host with four CPUs.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", TYPICAL_MEMINFO);
        fs.add_file("/proc/stat", TYPICAL_STAT);
        fs
    }

    /// Bare minimum content: only the recognized keys and the aggregate
    /// CPU line, without trailing newlines.
    pub fn minimal_system() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/meminfo",
            "MemTotal: 100 kB\nMemFree: 20 kB\nMemAvailable: 50 kB",
        );
        fs.add_file("/proc/stat", "cpu 1000000 0 2000000 3000000");
        fs
    }

    /// Typical host whose meminfo has a line without a colon.
    pub fn malformed_meminfo() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree 8192000 kB\nMemAvailable:   12000000 kB\n",
        );
        fs
    }

    /// Typical host whose stat lacks the aggregate `cpu` header.
    pub fn malformed_stat() -> Self {
        let mut fs = Self::typical_system();
        fs.add_file("/proc/stat", "intr 1000000 50 0 0\nctxt 500000\n");
        fs
    }
}

impl MockStatFs {
    /// A 100 GiB root filesystem with 40 GiB free, in 4 KiB blocks.
    pub fn typical_root() -> Self {
        let mut statfs = Self::new();
        statfs.add_mount(
            "/",
            FsStats {
                blocks: 26_214_400,
                blocks_free: 10_485_760,
                block_size: 4096,
            },
        );
        statfs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::procfs::parser::{parse_cpu_times, parse_meminfo};
    use crate::collector::traits::{FileSystem, StatFs};
    use std::path::Path;

    #[test]
    fn test_typical_system_parses() {
        let fs = MockFs::typical_system();
        let meminfo = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        let stat = fs.read_to_string(Path::new("/proc/stat")).unwrap();
        assert_eq!(parse_meminfo(&meminfo).unwrap().total, 16_384_000);
        assert_eq!(parse_cpu_times(&stat).unwrap().idle, 80_000);
    }

    #[test]
    fn test_malformed_scenarios_fail_to_parse() {
        let fs = MockFs::malformed_meminfo();
        let meminfo = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        assert!(parse_meminfo(&meminfo).is_err());

        let fs = MockFs::malformed_stat();
        let stat = fs.read_to_string(Path::new("/proc/stat")).unwrap();
        assert!(parse_cpu_times(&stat).is_err());
    }

    #[test]
    fn test_typical_root_is_100_gib() {
        let stats = MockStatFs::typical_root().statfs(Path::new("/")).unwrap();
        assert_eq!(stats.blocks * stats.block_size, 100 * 1024 * 1024 * 1024);
    }
}
