use crate::error::ApiError;
use crate::handlers::query_run::scan_key_groups;
use crate::models::KeyScanResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, http::Uri, Json};

/// Fallback handler for every path with no explicit route.
///
/// Any path containing the literal substring "queryrun" anywhere (such
/// as /foo/queryrun/bar) is dispatched to the key scan; everything else
/// is a 404. The substring match is deliberate; path-segment matching
/// would change which requests reach the scan.
pub async fn catch_all_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Json<KeyScanResponse>), ApiError> {
    if uri.path().contains("queryrun") {
        tracing::info!("Fallback path '{}' dispatched to key scan", uri.path());
        let scan = scan_key_groups(&state).await?;
        Ok((StatusCode::OK, Json(scan)))
    } else {
        tracing::info!("No route for path: {}", uri.path());
        Err(ApiError::NotFound("Not Found"))
    }
}
