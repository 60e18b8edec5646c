use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, routing::post, Router};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

use crate::app_state::AppState;
use crate::utils::api_response::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(login),
    components(schemas(Cleaner, LoginRequest)),
    tags((name = "Authentication", description = "Cleaner login against the static roster"))
)]
pub struct AuthDoc;

/// An authorized cleaner identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cleaner {
    pub id: String,
    pub name: String,
    pub hostel_type: String,
}

/// Static roster of cleaner identities. Built once at startup and shared
/// through `AppState`; it is not derived from the request store.
pub struct CleanerDirectory {
    cleaners: HashMap<String, Cleaner>,
}

impl CleanerDirectory {
    /// The fixed production roster.
    pub fn with_default_roster() -> Self {
        Self::from_entries([
            ("C001", "Rajesh Kumar", "mens"),
            ("C002", "Suresh Singh", "mens"),
            ("C003", "Priya Sharma", "ladies"),
            ("C004", "Anjali Gupta", "ladies"),
        ])
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        let cleaners = entries
            .into_iter()
            .map(|(id, name, hostel_type)| {
                (
                    id.to_owned(),
                    Cleaner {
                        id: id.to_owned(),
                        name: name.to_owned(),
                        hostel_type: hostel_type.to_owned(),
                    },
                )
            })
            .collect();
        Self { cleaners }
    }

    pub fn lookup(&self, cleaner_id: &str) -> Option<&Cleaner> {
        self.cleaners.get(cleaner_id)
    }
}

/// Represents a request to log in.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Cleaner ID, e.g. `C001`
    #[serde(default)]
    pub cleaner_id: Option<String>,
}

/// Handles cleaner login.
///
/// # Returns
/// * `200 OK` - Returns the cleaner record if the ID is in the roster.
/// * `401 Unauthorized` - If the cleaner ID is unknown.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body(
        content = LoginRequest,
        description = "Cleaner login details",
    ),
    responses(
        (status = 200, description = "Successful login", body = Cleaner),
        (status = 401, description = "Invalid cleaner ID")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ApiResponse<Cleaner>, ApiResponse<()>> {
    let cleaner_id = payload.cleaner_id.unwrap_or_default();
    match state.cleaners.lookup(&cleaner_id) {
        Some(cleaner) => {
            info!("✅ Login successful for cleaner: {cleaner_id}");
            Ok(ApiResponse::success(
                StatusCode::OK,
                "Login successful",
                cleaner.clone(),
            ))
        }
        None => {
            warn!("🔒 Login attempt with unknown cleaner ID: {cleaner_id:?}");
            Err(ApiResponse::error(
                StatusCode::UNAUTHORIZED,
                "Invalid cleaner ID",
                None,
            ))
        }
    }
}

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}
