//! OpenAPI documentation definition.

use hoststat_core::api::{
    ApiError, ApiErrorDetail, ApiSnapshot, CpuSummary, DiskSummary, MemorySummary,
    SystemInfoResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::handle_health,
        crate::handlers::handle_system_info,
    ),
    components(schemas(
        SystemInfoResponse,
        ApiSnapshot,
        MemorySummary,
        CpuSummary,
        DiskSummary,
        ApiError,
        ApiErrorDetail,
    )),
    info(
        title = "hoststat API",
        version = "1.0",
        description = "Point-in-time host memory, CPU and disk metrics"
    )
)]
pub(crate) struct ApiDoc;
