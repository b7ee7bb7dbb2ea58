use crate::error::{ApiError, ErrorResponse};
use crate::handlers::query_run::{LOCATION_KEY_PATTERN, USER_KEY_PATTERN};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /badbubu handler - Known-broken diagnostic scan
///
/// Mirrors /queryrun but asks the store for a pattern count, an
/// operation the key-value client does not support. The call errors and
/// the request fails with a 500. Kept as a guaranteed-failure endpoint;
/// callers rely on it never succeeding.
#[utoipa::path(
    get,
    path = routes::BAD_COUNT,
    responses(
        (status = 500, description = "Pattern counts are unsupported by the store", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn bad_count_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let user_keys = state.kv.keys(USER_KEY_PATTERN).await?;
    tracing::info!("User keys: {:?}", user_keys);

    // Fails against every supported store.
    let location_count = state.kv.count(LOCATION_KEY_PATTERN).await?;
    tracing::info!("Location key count: {}", location_count);

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "user_keys": user_keys,
            "location_keys": location_count,
        })),
    ))
}
