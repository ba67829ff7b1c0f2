mod access_log;
mod handlers;
mod openapi;
mod state;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use clap::{Parser, ValueEnum};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use hoststat_core::collector::{
    Collector, DEFAULT_MOUNT_PATH, DEFAULT_PROC_PATH, DiskErrorPolicy, MemoryLayout,
};
#[cfg(not(target_os = "linux"))]
use hoststat_core::collector::{MockFs, MockStatFs};
#[cfg(target_os = "linux")]
use hoststat_core::collector::{RealFs, RealStatFs};
use hoststat_core::provider::SnapshotProvider;

use openapi::ApiDoc;
use state::{SharedState, WebApp};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// ============================================================
// CLI
// ============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DiskErrors {
    /// Report zero usage when the mount point cannot be queried.
    Zero,
    /// Fail the request when the mount point cannot be queried.
    Strict,
}

impl From<DiskErrors> for DiskErrorPolicy {
    fn from(d: DiskErrors) -> Self {
        match d {
            DiskErrors::Zero => DiskErrorPolicy::ZeroFallback,
            DiskErrors::Strict => DiskErrorPolicy::Strict,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A single JSON object with true free/available memory.
    Standard,
    /// One-element JSON array with the v1 memory field placement.
    Legacy,
}

#[derive(Parser)]
#[command(name = "hoststat-web", about = "Host metrics HTTP API", version = hoststat_core::VERSION)]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "0.0.0.0:8001", env = "HOSTSTAT_LISTEN")]
    listen: String,

    /// Path to /proc filesystem.
    #[arg(long, default_value = DEFAULT_PROC_PATH, env = "HOSTSTAT_PROC_PATH")]
    proc_path: String,

    /// Mount point whose disk usage is reported.
    #[arg(long, default_value = DEFAULT_MOUNT_PATH, env = "HOSTSTAT_MOUNT_PATH")]
    mount_path: String,

    /// Behavior when the mount point cannot be queried.
    #[arg(long, value_enum, default_value_t = DiskErrors::Zero, env = "HOSTSTAT_DISK_ERRORS")]
    disk_errors: DiskErrors,

    /// Response layout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Standard, env = "HOSTSTAT_OUTPUT")]
    output: OutputFormat,

    /// Per-request collection timeout in seconds.
    #[arg(
        long,
        default_value = "5",
        env = "HOSTSTAT_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hoststat_web=info,hoststat_core=info".into()),
        )
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            process::exit(1);
        }
    };
    runtime.block_on(async_main(args));
}

async fn async_main(args: Args) {
    info!(
        version = hoststat_core::VERSION,
        proc_path = %args.proc_path,
        mount_path = %args.mount_path,
        disk_errors = ?args.disk_errors,
        output = ?args.output,
        "starting"
    );

    let legacy = args.output == OutputFormat::Legacy;
    let state: SharedState = Arc::new(WebApp {
        provider: create_provider(&args),
        legacy_envelope: legacy,
        collect_timeout: Duration::from_secs(args.timeout_secs),
    });

    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    let addr: SocketAddr = match args.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(listen = %args.listen, error = %e, "invalid listen address");
            process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            process::exit(1);
        }
    };
    info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        process::exit(1);
    }
    info!("shut down");
}

/// Builds the router with all routes and middleware.
pub(crate) fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::handle_health))
        .route("/api/v1/SystemInfo", get(handlers::handle_system_info))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(axum::middleware::from_fn(access_log::access_log))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

fn create_provider(args: &Args) -> Arc<dyn SnapshotProvider> {
    let layout = match args.output {
        OutputFormat::Standard => MemoryLayout::Corrected,
        OutputFormat::Legacy => MemoryLayout::Legacy,
    };

    #[cfg(target_os = "linux")]
    let collector = Collector::new(RealFs::new(), RealStatFs::new(), &args.proc_path);
    #[cfg(not(target_os = "linux"))]
    let collector = {
        warn!("not running on Linux, serving fixture data");
        Collector::new(
            MockFs::typical_system(),
            MockStatFs::typical_root(),
            &args.proc_path,
        )
    };

    Arc::new(
        collector
            .with_mount_path(&args.mount_path)
            .with_disk_policy(args.disk_errors.into())
            .with_memory_layout(layout),
    )
}
