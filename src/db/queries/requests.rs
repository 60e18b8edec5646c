use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::db::models::requests::{
    CleaningRequest, CleaningStatus, NewCleaningRequest, UpdateStatusRequest,
};
use crate::db::store::StoreError;
use crate::utils::api_response::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_cleaning_requests,
        create_cleaning_request,
        update_request_status,
        delete_cleaning_request
    ),
    components(schemas(
        CleaningRequest,
        CleaningStatus,
        NewCleaningRequest,
        UpdateStatusRequest
    )),
    tags((name = "Requests", description = "Room-cleaning request lifecycle"))
)]
pub struct RequestDoc;

/// Map a store failure to the uniform 500 envelope for the current caller.
fn store_error(e: StoreError) -> ApiResponse<()> {
    error!("❌ Store operation failed: {e}");
    ApiResponse::error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Request store unavailable",
        Some(json!({"error": e.to_string()})),
    )
}

#[utoipa::path(
    get,
    path = "/api/requests",
    responses(
        (status = 200, description = "All cleaning requests in stored order", body = Vec<CleaningRequest>),
        (status = 500, description = "Request store unavailable")
    ),
    tag = "Requests"
)]
pub async fn list_cleaning_requests(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<CleaningRequest>>, ApiResponse<()>> {
    let doc = state.store.load().map_err(store_error)?;
    Ok(ApiResponse::success(
        StatusCode::OK,
        "Cleaning requests retrieved",
        doc.cleaning_requests,
    ))
}

#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = NewCleaningRequest,
    responses(
        (status = 200, description = "Cleaning request created", body = CleaningRequest),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Request store unavailable")
    ),
    tag = "Requests"
)]
pub async fn create_cleaning_request(
    State(state): State<AppState>,
    Json(payload): Json<NewCleaningRequest>,
) -> Result<ApiResponse<CleaningRequest>, ApiResponse<()>> {
    // Presence check happens before the store is touched: a bad payload must
    // not mutate anything.
    let (hostel_type, block, room_number, student_id) =
        payload.required_fields().ok_or_else(|| {
            warn!("Rejected cleaning request with missing fields");
            ApiResponse::error(StatusCode::BAD_REQUEST, "Missing fields", None)
        })?;

    let request = CleaningRequest::new(hostel_type, block, room_number, student_id);

    let _guard = state.store.write_guard().await;
    let mut doc = state.store.load().map_err(store_error)?;
    doc.cleaning_requests.push(request.clone());
    state.store.save(&doc).map_err(store_error)?;

    info!(
        "🧹 Cleaning request {} created for room {}/{}",
        request.id, request.block, request.room_number
    );
    Ok(ApiResponse::success(
        StatusCode::OK,
        "Cleaning request created",
        request,
    ))
}

#[utoipa::path(
    put,
    path = "/api/requests/{request_id}/status",
    params(
        ("request_id" = String, Path, description = "Cleaning request ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = CleaningRequest),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Request not found"),
        (status = 500, description = "Request store unavailable")
    ),
    tag = "Requests"
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<ApiResponse<CleaningRequest>, ApiResponse<()>> {
    let status = payload
        .status
        .as_deref()
        .and_then(CleaningStatus::parse)
        .ok_or_else(|| {
            warn!("Rejected invalid status {:?} for request {request_id}", payload.status);
            ApiResponse::error(StatusCode::BAD_REQUEST, "Invalid status", None)
        })?;

    let _guard = state.store.write_guard().await;
    let mut doc = state.store.load().map_err(store_error)?;
    let request = doc
        .cleaning_requests
        .iter_mut()
        .find(|r| r.id == request_id)
        .ok_or_else(|| ApiResponse::error(StatusCode::NOT_FOUND, "Request not found", None))?;

    request.apply_status(status);
    let updated = request.clone();
    state.store.save(&doc).map_err(store_error)?;

    info!("Cleaning request {request_id} moved to {:?}", status);
    Ok(ApiResponse::success(
        StatusCode::OK,
        "Status updated",
        updated,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/requests/{request_id}",
    params(
        ("request_id" = String, Path, description = "Cleaning request ID")
    ),
    responses(
        (status = 200, description = "Cleaning request removed", body = CleaningRequest),
        (status = 404, description = "Request not found"),
        (status = 500, description = "Request store unavailable")
    ),
    tag = "Requests"
)]
pub async fn delete_cleaning_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<ApiResponse<CleaningRequest>, ApiResponse<()>> {
    let _guard = state.store.write_guard().await;
    let mut doc = state.store.load().map_err(store_error)?;
    let index = doc
        .cleaning_requests
        .iter()
        .position(|r| r.id == request_id)
        .ok_or_else(|| ApiResponse::error(StatusCode::NOT_FOUND, "Request not found", None))?;

    let removed = doc.cleaning_requests.remove(index);
    state.store.save(&doc).map_err(store_error)?;

    info!("🗑️ Cleaning request {request_id} deleted");
    Ok(ApiResponse::success(
        StatusCode::OK,
        "Cleaning request deleted",
        removed,
    ))
}
