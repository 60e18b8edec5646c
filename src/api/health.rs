use axum::http::StatusCode;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::app_state::AppState;

/// Defines health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health/live", get(liveness_check))
        .route("/health/ready", get(readiness_check))
}

/// **Liveness Check (Basic Check)**
/// - Verifies that the API is running
/// - Does NOT check the request store
async fn liveness_check() -> Json<serde_json::Value> {
    Json(json!({ "success": true, "message": "API is live" }))
}

/// **Readiness Check (Store Readability Check)**
/// - Ensures the request store can be read
/// - Returns `500` if the store file is unreadable or malformed
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state.store.load().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "success": false, "error": "Request store unavailable", "details": e.to_string() })
                .to_string(),
        )
    })?;

    Ok(Json(json!({ "success": true, "message": "API is ready" })))
}
