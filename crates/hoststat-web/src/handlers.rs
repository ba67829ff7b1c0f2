//! HTTP request handlers.

use axum::http::StatusCode;
use axum::Extension;
use axum::response::{IntoResponse, Json, Response};
use tracing::{debug, error};

use hoststat_core::api::{ApiError, SystemInfoResponse};

use crate::access_log::CollectOutcome;
use crate::state::AppState;

// ============================================================
// Health
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub(crate) async fn handle_health() -> &'static str {
    "ok"
}

// ============================================================
// System info
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/SystemInfo",
    responses(
        (status = 200, description = "Current memory, CPU and disk snapshot", body = SystemInfoResponse),
        (status = 500, description = "A metrics source could not be read or parsed", body = ApiError),
        (status = 503, description = "Collection did not finish in time", body = ApiError)
    )
)]
pub(crate) async fn handle_system_info(axum::extract::State(state): AppState) -> Response {
    let provider = state.provider.clone();
    // Pseudo-file reads and statvfs block — keep them off the async workers.
    let task = tokio::task::spawn_blocking(move || provider.snapshot_timed());

    match tokio::time::timeout(state.collect_timeout, task).await {
        Ok(Ok(Ok((snapshot, timing)))) => {
            if let Some(t) = timing {
                debug!(
                    total_us = t.total.as_micros() as u64,
                    "system info collected"
                );
            }
            (
                Extension(CollectOutcome::Ok),
                Json(SystemInfoResponse::new(&snapshot, state.legacy_envelope)),
            )
                .into_response()
        }
        Ok(Ok(Err(e))) => {
            error!(error = %e, "snapshot collection failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                CollectOutcome::from(&e),
                ApiError::from(&e),
            )
        }
        Ok(Err(e)) => {
            error!(error = %e, "snapshot task failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                CollectOutcome::Internal,
                ApiError::new("internal", "snapshot task failed"),
            )
        }
        Err(_) => {
            error!(
                timeout_ms = state.collect_timeout.as_millis() as u64,
                "snapshot collection timed out"
            );
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                CollectOutcome::Timeout,
                ApiError::new("timeout", "snapshot collection timed out"),
            )
        }
    }
}

fn error_response(status: StatusCode, outcome: CollectOutcome, body: ApiError) -> Response {
    (status, Extension(outcome), Json(body)).into_response()
}
