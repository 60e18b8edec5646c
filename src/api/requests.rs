use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::app_state::AppState;
use crate::db::queries::requests::*;

pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/api/requests", get(list_cleaning_requests))
        .route("/api/requests", post(create_cleaning_request))
        .route("/api/requests/{request_id}/status", put(update_request_status))
        .route("/api/requests/{request_id}", delete(delete_cleaning_request))
}
