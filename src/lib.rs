//! Clean VIT backend: hostel room-cleaning request tracking over a flat JSON
//! store.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod app_state;
pub mod config;
pub mod db;
pub mod utils;

use crate::api::auth::AuthDoc;
use crate::app_state::AppState;
use crate::db::queries::requests::RequestDoc;

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let merged_doc = AuthDoc::openapi().merge_from(RequestDoc::openapi());

    Router::new()
        .merge(api::health::health_routes())
        .merge(api::auth::auth_routes())
        .merge(api::requests::request_routes())
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", merged_doc))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
