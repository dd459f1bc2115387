//! Top-Level Router
//!
//! Assembles the API routes, CORS layer, and fallback into the final
//! application router.

use axum::{http::StatusCode, response::Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the application router
pub fn create_router(app_state: AppState) -> Router<()> {
    configure_api_routes(app_state.clone())
        .layer(CorsLayer::permissive())
        .fallback(not_found)
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not found",
            "status": 404,
        })),
    )
}
