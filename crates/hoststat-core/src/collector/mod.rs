//! Host metrics collector.
//!
//! This module provides infrastructure for collecting memory, CPU and disk
//! metrics from the Linux `/proc` filesystem and `statvfs(3)`, with support
//! for mocking for testing on macOS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Collector                           │
//! │  ┌─────────────────┐ ┌─────────────────┐ ┌───────────────┐  │
//! │  │ MemoryCollector │ │  CpuCollector   │ │ DiskCollector │  │
//! │  │ - /proc/meminfo │ │  - /proc/stat   │ │ - statvfs     │  │
//! │  └────────┬────────┘ └────────┬────────┘ └───────┬───────┘  │
//! │           └─────────┬─────────┘                  │          │
//! │              ┌──────▼──────┐              ┌──────▼──────┐   │
//! │              │ FileSystem  │ (trait)      │   StatFs    │   │
//! │              └──────┬──────┘              └──────┬──────┘   │
//! └─────────────────────┼────────────────────────────┼──────────┘
//!              ┌────────┴────────┐          ┌────────┴────────┐
//!       ┌──────▼──────┐   ┌──────▼──────┐ ┌─▼──────────┐ ┌────▼───────┐
//!       │   RealFs    │   │   MockFs    │ │ RealStatFs │ │ MockStatFs │
//!       └─────────────┘   └─────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use hoststat_core::collector::{Collector, RealFs, RealStatFs};
//!
//! let collector = Collector::new(RealFs::new(), RealStatFs::new(), "/proc");
//! let snapshot = collector.build_snapshot().unwrap();
//! ```
//!
//! ## Testing (with mocks)
//!
//! ```
//! use hoststat_core::collector::{Collector, MockFs, MockStatFs};
//!
//! let collector = Collector::new(MockFs::typical_system(), MockStatFs::typical_root(), "/proc");
//! let snapshot = collector.build_snapshot().unwrap();
//! assert_eq!(snapshot.disk.all, 100);
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod disk;
mod error;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use collector::{Collector, CollectorTiming, DEFAULT_PROC_PATH, MemoryLayout};
pub use disk::{DEFAULT_MOUNT_PATH, DiskCollector, DiskErrorPolicy};
pub use error::CollectError;
pub use mock::{MockFs, MockStatFs};
pub use procfs::{CpuCollector, MemoryCollector, ParseError};
pub use traits::{FileSystem, FsStats, MetricCollector, RealFs, RealStatFs, StatFs};
