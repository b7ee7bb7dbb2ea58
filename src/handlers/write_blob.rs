use crate::error::{ApiError, ErrorResponse};
use crate::models::{BlobWriteRequest, BlobWriteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

/// Substituted when a request body carries an empty or missing
/// file_content field.
const PLACEHOLDER_CONTENT: &str = "no content provided";

/// POST /write_to_s3 handler - Persist a blob to the object store
///
/// The JSON body is optional, as is each of its fields:
/// - no body at all: a `default_<timestamp>.txt` object with generated content
/// - missing/empty file_name: an `unnamed_<timestamp>.txt` object
/// - missing/empty file_content: a fixed placeholder string
#[utoipa::path(
    post,
    path = routes::WRITE_BLOB,
    request_body = BlobWriteRequest,
    responses(
        (status = 200, description = "Blob stored", body = BlobWriteResponse),
        (status = 500, description = "Bucket not configured or store error", body = ErrorResponse)
    ),
    tag = "storage"
)]
pub async fn write_blob_handler(
    State(state): State<AppState>,
    body: Option<Json<BlobWriteRequest>>,
) -> Result<(StatusCode, Json<BlobWriteResponse>), ApiError> {
    let bucket = state
        .config
        .bucket_name
        .as_deref()
        .ok_or(ApiError::MissingConfig("BUCKET_NAME environment variable not set"))?;

    let stamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let (file_name, file_content) = match body {
        None => (
            format!("default_{}.txt", stamp),
            format!("default file created at {}", stamp),
        ),
        Some(Json(request)) => {
            let file_name = match request.file_name.filter(|name| !name.is_empty()) {
                Some(name) => name,
                None => format!("unnamed_{}.txt", stamp),
            };
            let file_content = request
                .file_content
                .filter(|content| !content.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_CONTENT.to_string());
            (file_name, file_content)
        }
    };

    match state
        .objects
        .put_object(bucket, &file_name, file_content.clone().into_bytes())
        .await
    {
        Ok(()) => {
            tracing::info!("Wrote '{}' to bucket '{}'", file_name, bucket);
            Ok((
                StatusCode::OK,
                Json(BlobWriteResponse {
                    message: format!("File '{}' written to bucket '{}'", file_name, bucket),
                    file_name,
                    file_content,
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Writing '{}' to bucket '{}' failed: {:#}", file_name, bucket, e);
            Err(ApiError::Upstream(e.context("Failed to upload file")))
        }
    }
}
