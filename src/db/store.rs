use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use crate::db::models::requests::CleaningRequest;

/// Errors surfaced by the request store. All of them map to a 500 for the
/// caller; at startup a load failure is fatal instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write store file: {0}")]
    Write(#[source] std::io::Error),
    #[error("store file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The entire persisted state: one JSON object holding every cleaning request
/// in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(rename = "cleaningRequests")]
    pub cleaning_requests: Vec<CleaningRequest>,
}

/// Whole-document JSON persistence for cleaning requests.
///
/// Every operation reads or rewrites the full file. There is no partial-write
/// protection; mutating callers hold [`RequestStore::write_guard`] across
/// their load-mutate-save cycle so concurrent handlers cannot interleave and
/// drop each other's updates.
pub struct RequestStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the mutation lock. Hold the guard from before `load` until
    /// after `save`.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read the full document. A missing file is initialized to an empty
    /// document and persisted before returning.
    pub fn load(&self) -> Result<StoreDocument, StoreError> {
        if !self.path.exists() {
            let doc = StoreDocument::default();
            self.save(&doc)?;
            return Ok(doc);
        }
        let raw = fs::read_to_string(&self.path).map_err(StoreError::Read)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the persisted document, pretty-printed.
    pub fn save(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc).map_err(StoreError::Malformed)?;
        fs::write(&self.path, raw).map_err(StoreError::Write)
    }
}
