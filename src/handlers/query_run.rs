use crate::error::{ApiError, ErrorResponse};
use crate::models::KeyScanResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub const USER_KEY_PATTERN: &str = "*users*";
pub const LOCATION_KEY_PATTERN: &str = "*location*";

/// Scan the store for the two diagnostic key groups.
///
/// Every matching key is materialized in memory before the response is
/// built; on a store with a very large keyspace this is an expensive
/// full scan. Also used by the fallback route.
pub async fn scan_key_groups(state: &AppState) -> Result<KeyScanResponse, ApiError> {
    let user_keys = state.kv.keys(USER_KEY_PATTERN).await?;
    let location_keys = state.kv.keys(LOCATION_KEY_PATTERN).await?;

    tracing::info!("User keys: {:?}", user_keys);
    tracing::info!("Location keys: {:?}", location_keys);

    Ok(KeyScanResponse {
        user_keys,
        location_keys,
    })
}

/// GET /queryrun handler - Diagnostic key scan
#[utoipa::path(
    get,
    path = routes::QUERY_RUN,
    responses(
        (status = 200, description = "Matching key groups", body = KeyScanResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "diagnostics"
)]
pub async fn query_run_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<KeyScanResponse>), ApiError> {
    let scan = scan_key_groups(&state).await?;
    Ok((StatusCode::OK, Json(scan)))
}
