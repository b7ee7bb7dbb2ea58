use crate::error::{ApiError, ErrorResponse};
use crate::models::DataResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /data/:id handler - Look up a single key
#[utoipa::path(
    get,
    path = routes::DATA_ITEM,
    params(
        ("id" = String, Path, description = "Key to look up")
    ),
    responses(
        (status = 200, description = "Key found", body = DataResponse),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn get_data_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<DataResponse>), ApiError> {
    match state.kv.get(&id).await? {
        Some(data) => {
            tracing::info!("Successfully retrieved data for key: {}", id);
            Ok((StatusCode::OK, Json(DataResponse { id, data })))
        }
        None => {
            tracing::info!("No data found for key: {}", id);
            Err(ApiError::NotFound("Data not found"))
        }
    }
}
