//! Unit conversion helpers.
//!
//! All functions are pure. Integer conversions truncate toward zero.

/// Divisor applied to cumulative CPU clock-tick counters.
///
/// This is a fixed normalization, not a jiffies-to-seconds conversion.
pub const CPU_NORMALIZATION_FACTOR: f64 = 1_000_000.0;

/// Divisor applied to memory values reported in KiB.
pub const MEM_NORMALIZATION_FACTOR: u64 = 1_000_000;

/// Bytes in one binary gigabyte (GiB).
pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Scales a KiB memory value by [`MEM_NORMALIZATION_FACTOR`].
pub fn kb_to_gb_scaled(value: u64) -> u64 {
    value / MEM_NORMALIZATION_FACTOR
}

/// Converts a byte count to whole GiB, dropping the remainder.
pub fn bytes_to_gb(value: u64) -> u64 {
    value / BYTES_PER_GIB
}

/// Normalizes a clock-tick counter by [`CPU_NORMALIZATION_FACTOR`].
pub fn normalize_cpu_ticks(ticks: u64) -> f64 {
    ticks as f64 / CPU_NORMALIZATION_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(kb_to_gb_scaled(0), 0);
        assert_eq!(bytes_to_gb(0), 0);
        assert_eq!(normalize_cpu_ticks(0), 0.0);
    }

    #[test]
    fn test_kb_to_gb_scaled_truncates() {
        assert_eq!(kb_to_gb_scaled(999_999), 0);
        assert_eq!(kb_to_gb_scaled(1_000_000), 1);
        assert_eq!(kb_to_gb_scaled(16_384_000), 16);
    }

    #[test]
    fn test_bytes_to_gb_truncates() {
        assert_eq!(bytes_to_gb(BYTES_PER_GIB - 1), 0);
        assert_eq!(bytes_to_gb(BYTES_PER_GIB), 1);
        assert_eq!(bytes_to_gb(BYTES_PER_GIB * 5 + BYTES_PER_GIB / 2), 5);
    }

    #[test]
    fn test_normalize_cpu_ticks() {
        assert_eq!(normalize_cpu_ticks(1_000_000), 1.0);
        assert_eq!(normalize_cpu_ticks(2_500_000), 2.5);
    }

    #[test]
    fn test_conversions_are_monotonic() {
        let samples = [
            0,
            1,
            999_999,
            1_000_000,
            BYTES_PER_GIB - 1,
            BYTES_PER_GIB,
            BYTES_PER_GIB * 3 + 7,
            u64::MAX / 2,
            u64::MAX,
        ];
        for pair in samples.windows(2) {
            assert!(kb_to_gb_scaled(pair[0]) <= kb_to_gb_scaled(pair[1]));
            assert!(bytes_to_gb(pair[0]) <= bytes_to_gb(pair[1]));
            assert!(normalize_cpu_ticks(pair[0]) <= normalize_cpu_ticks(pair[1]));
        }
    }
}
