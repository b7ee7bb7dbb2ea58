use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{BlobWriteRequest, BlobWriteResponse, DataResponse, KeyScanResponse};

/// OpenAPI documentation
///
/// The fallback route is not listed: it has no fixed path.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-redis-gateway API",
        version = "1.0.0",
        description = "A small HTTP gateway over a Redis key-value store with S3 write-through"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get_data::get_data_handler,
        handlers::query_run::query_run_handler,
        handlers::bad_count::bad_count_handler,
        handlers::write_blob::write_blob_handler
    ),
    components(
        schemas(
            DataResponse,
            KeyScanResponse,
            BlobWriteRequest,
            BlobWriteResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "data", description = "Key-value lookups"),
        (name = "diagnostics", description = "Key scan diagnostics"),
        (name = "storage", description = "Object store writes")
    )
)]
pub struct ApiDoc;
