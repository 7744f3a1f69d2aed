// backend/src/routes/mod.rs

use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::ResultDto;

pub mod system;

// Request mappings
pub const M_API: &str = "/api";
pub const M_V1: &str = "/v1";
pub const M_SYSTEM_INFO: &str = "/info";

/// `/api/v1/info`
pub fn system_info_path() -> String {
    format!("{M_API}{M_V1}{M_SYSTEM_INFO}")
}

/// Root API router with every endpoint and the shared middleware.
pub fn router() -> Router {
    Router::new()
        // system
        .route(&system_info_path(), get(system::info))
        // anything else
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<ResultDto<()>>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ResultDto::error(format!("endpoint not found: {}", uri.path()))),
    )
}
