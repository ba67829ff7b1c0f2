//! API snapshot types — the JSON payload of `/api/v1/SystemInfo`.
//!
//! Field names are part of the wire contract consumed by existing dashboards:
//! memory keys are PascalCase, CPU and disk keys are lowercase.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One point-in-time view of the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiSnapshot {
    pub mem: MemorySummary,
    pub cpu: CpuSummary,
    pub disk: DiskSummary,
}

/// Memory in KiB divided by 1,000,000 (roughly GB), truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemorySummary {
    #[serde(rename = "MemTotal")]
    pub mem_total: u64,
    #[serde(rename = "MemFree")]
    pub mem_free: u64,
    #[serde(rename = "MemAvailable")]
    pub mem_available: u64,
}

/// Cumulative clock ticks since boot divided by 1,000,000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CpuSummary {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}

/// Disk usage of the configured mount point, whole GiB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiskSummary {
    pub all: u64,
    pub used: u64,
    pub free: u64,
}

/// Response body: a bare object, or a one-element array in legacy mode.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SystemInfoResponse {
    Object(ApiSnapshot),
    Array(Vec<ApiSnapshot>),
}

/// Error body returned on failed collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    /// One of `io`, `parse`, `timeout`, `internal`.
    pub kind: String,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                kind: kind.into(),
                message: message.into(),
            },
        }
    }
}
