use std::sync::Arc;

use crate::api::auth::CleanerDirectory;
use crate::db::store::RequestStore;

/// Shared state handed to every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RequestStore>,
    pub cleaners: Arc<CleanerDirectory>,
}
