//! Conversion from collector records to API types.

use crate::collector::CollectError;
use crate::model::Snapshot;

use super::snapshot::{
    ApiError, ApiSnapshot, CpuSummary, DiskSummary, MemorySummary, SystemInfoResponse,
};

impl From<&Snapshot> for ApiSnapshot {
    fn from(s: &Snapshot) -> Self {
        ApiSnapshot {
            mem: MemorySummary {
                mem_total: s.mem.total,
                mem_free: s.mem.free,
                mem_available: s.mem.available,
            },
            cpu: CpuSummary {
                user: s.cpu.user,
                system: s.cpu.system,
                idle: s.cpu.idle,
            },
            disk: DiskSummary {
                all: s.disk.all,
                used: s.disk.used,
                free: s.disk.free,
            },
        }
    }
}

impl SystemInfoResponse {
    /// Wraps a snapshot, as a one-element array when `as_array` is set.
    pub fn new(snapshot: &Snapshot, as_array: bool) -> Self {
        let api = ApiSnapshot::from(snapshot);
        if as_array {
            SystemInfoResponse::Array(vec![api])
        } else {
            SystemInfoResponse::Object(api)
        }
    }
}

impl From<&CollectError> for ApiError {
    fn from(e: &CollectError) -> Self {
        ApiError::new(e.kind(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ParseError;
    use crate::model::{CpuLoad, DiskStatus, MemoryInfo};
    use serde_json::json;

    fn sample() -> Snapshot {
        Snapshot {
            mem: MemoryInfo {
                total: 16,
                free: 8,
                available: 12,
            },
            cpu: CpuLoad {
                user: 1.0,
                system: 2.0,
                idle: 3.5,
            },
            disk: DiskStatus {
                all: 100,
                used: 60,
                free: 40,
            },
        }
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(ApiSnapshot::from(&sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "mem": {"MemTotal": 16, "MemFree": 8, "MemAvailable": 12},
                "cpu": {"user": 1.0, "system": 2.0, "idle": 3.5},
                "disk": {"all": 100, "used": 60, "free": 40}
            })
        );
    }

    #[test]
    fn test_memory_and_disk_serialize_as_integers() {
        let body = serde_json::to_string(&ApiSnapshot::from(&sample())).unwrap();
        assert!(body.contains("\"MemTotal\":16,"));
        assert!(body.contains("\"all\":100,"));
        assert!(body.contains("\"idle\":3.5"));
    }

    #[test]
    fn test_response_envelope() {
        let object = serde_json::to_value(SystemInfoResponse::new(&sample(), false)).unwrap();
        assert!(object.is_object());

        let array = serde_json::to_value(SystemInfoResponse::new(&sample(), true)).unwrap();
        let items = array.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], object);
    }

    #[test]
    fn test_api_error_from_collect_error() {
        let err = CollectError::parse("/proc/stat", ParseError::new("missing 'cpu' header"));
        let body = serde_json::to_value(ApiError::from(&err)).unwrap();
        assert_eq!(body["error"]["kind"], "parse");
        assert_eq!(
            body["error"]["message"],
            "parse error in /proc/stat: missing 'cpu' header"
        );
    }
}
