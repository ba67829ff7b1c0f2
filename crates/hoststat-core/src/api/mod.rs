//! API types for hoststat-web JSON serialization.
//!
//! These structures mirror the response of the system info endpoint.
//! Values are already unit-converted by the collector.

pub mod convert;
pub mod snapshot;

pub use snapshot::{
    ApiError, ApiErrorDetail, ApiSnapshot, CpuSummary, DiskSummary, MemorySummary,
    SystemInfoResponse,
};
