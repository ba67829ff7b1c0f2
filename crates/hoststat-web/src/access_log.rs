//! Access logging middleware.
//!
//! Metric requests log at `info` together with how collection ended.
//! Health checks log at `debug` so a frequent liveness check does not
//! drown the log. Swagger UI assets are not logged.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info};

use hoststat_core::collector::CollectError;

/// How a `/api/v1/SystemInfo` request ended, attached to the response by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollectOutcome {
    Ok,
    Io,
    Parse,
    Timeout,
    Internal,
}

impl CollectOutcome {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            CollectOutcome::Ok => "ok",
            CollectOutcome::Io => "io",
            CollectOutcome::Parse => "parse",
            CollectOutcome::Timeout => "timeout",
            CollectOutcome::Internal => "internal",
        }
    }
}

impl From<&CollectError> for CollectOutcome {
    fn from(e: &CollectError) -> Self {
        match e {
            CollectError::Io { .. } => CollectOutcome::Io,
            CollectError::Parse { .. } => CollectOutcome::Parse,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum RouteClass {
    Health,
    Docs,
    Api,
}

fn classify(path: &str) -> RouteClass {
    if path == "/api/v1/health" {
        RouteClass::Health
    } else if path.starts_with("/swagger-ui") || path.starts_with("/api-docs") {
        RouteClass::Docs
    } else {
        RouteClass::Api
    }
}

pub(crate) async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "-".to_owned());
    let started = Instant::now();

    let response = next.run(req).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    match classify(&path) {
        RouteClass::Health => debug!(client, status, latency_ms, "{method} {path}"),
        RouteClass::Docs => {}
        RouteClass::Api => {
            let outcome = response
                .extensions()
                .get::<CollectOutcome>()
                .map_or("-", |o| o.as_str());
            info!(client, status, latency_ms, outcome, "{method} {path}");
        }
    }
    response
}
