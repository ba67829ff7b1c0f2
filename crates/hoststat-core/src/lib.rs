//! hoststat-core — point-in-time host metrics.
//!
//! Provides:
//! - `units` — conversions from kernel-native units to display units
//! - `model` — the records produced by the collectors
//! - `collector` — `/proc` parsers, memory/CPU/disk collectors, snapshot assembly
//! - `provider` — snapshot source abstraction used by the HTTP layer
//!
//! With `api` feature (default):
//! - `api` — JSON-serializable response types

pub mod collector;
pub mod model;
pub mod provider;
pub mod units;

#[cfg(feature = "api")]
pub mod api;

/// Crate version with the short git revision it was built from.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HOSTSTAT_GIT_SHA"),
    ")"
);
