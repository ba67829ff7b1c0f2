//! Shared application state.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;

use hoststat_core::provider::SnapshotProvider;

/// Read-only state shared by all requests.
///
/// Nothing here changes after startup; every request collects its own
/// snapshot.
pub(crate) struct WebApp {
    pub(crate) provider: Arc<dyn SnapshotProvider>,
    /// Wrap the snapshot in a one-element array.
    pub(crate) legacy_envelope: bool,
    /// Upper bound on one collection.
    pub(crate) collect_timeout: Duration,
}

pub(crate) type SharedState = Arc<WebApp>;

pub(crate) type AppState = State<SharedState>;
