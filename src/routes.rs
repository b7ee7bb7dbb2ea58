// Route path constants - single source of truth for all API paths

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const DATA_ITEM: &str = "/data/{id}";
pub const QUERY_RUN: &str = "/queryrun";
pub const BAD_COUNT: &str = "/badbubu";
pub const WRITE_BLOB: &str = "/write_to_s3";

/// Build the application router.
///
/// Unmatched paths land in the fallback handler, which keeps the
/// original substring-based `queryrun` dispatch.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(DATA_ITEM, get(handlers::get_data_handler))
        .route(QUERY_RUN, get(handlers::query_run_handler))
        .route(BAD_COUNT, get(handlers::bad_count_handler))
        .route(WRITE_BLOB, post(handlers::write_blob_handler))
        .fallback(handlers::catch_all_handler)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
