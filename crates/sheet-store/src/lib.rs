//! Sheet Store
//!
//! The persistence collaborator for technical sheets. The core pipeline
//! never blocks on storage: a save writes the JSON document to a fast
//! local cache keyed by project id, then pushes to the remote backend on
//! a best-effort basis. Either write failing is logged and non-fatal; the
//! in-memory document is never rolled back.
//!
//! The persisted shape is exactly the `Vec<TableSection>` JSON form —
//! validation rules do not serialize, which is why callers rehydrate
//! documents after loading them.

mod local;
mod write_through;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sheet_model::TableSection;

pub use local::LocalCacheStore;
pub use write_through::WriteThroughStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid project id: {0}")]
    InvalidProjectId(String),

    #[error("remote sync failed: {0}")]
    Remote(String),
}

/// Durable storage for a project's technical sheet
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Persist the document for a project
    async fn save(&self, project_id: &str, sections: &[TableSection]) -> Result<(), StoreError>;

    /// Load the last persisted document, if any. The result has been
    /// through JSON and must be rehydrated before use.
    async fn load(&self, project_id: &str) -> Result<Option<Vec<TableSection>>, StoreError>;
}

/// What the remote backend receives on sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePayload {
    pub technical_sections: Vec<TableSection>,
}

/// The remote backend boundary. The real implementation lives with the
/// dashboard's API client; tests use doubles.
#[async_trait]
pub trait RemoteSink: Send + Sync {
    async fn push(&self, project_id: &str, payload: &RemotePayload) -> Result<(), StoreError>;
}
