//! Write-through composition: local cache first, then best-effort remote

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use sheet_model::TableSection;

use crate::{LocalCacheStore, RemotePayload, RemoteSink, SheetStore, StoreError};

/// Cache-first persistence with fire-and-forget remote sync
///
/// `save` never fails from the caller's perspective: a cache write error
/// and a remote push error are both logged and swallowed, because the
/// in-memory document is the working copy and must not be rolled back or
/// blocked by storage trouble.
pub struct WriteThroughStore {
    cache: LocalCacheStore,
    remote: Option<Arc<dyn RemoteSink>>,
}

impl WriteThroughStore {
    pub fn new(cache: LocalCacheStore) -> Self {
        WriteThroughStore {
            cache,
            remote: None,
        }
    }

    pub fn with_remote(cache: LocalCacheStore, remote: Arc<dyn RemoteSink>) -> Self {
        WriteThroughStore {
            cache,
            remote: Some(remote),
        }
    }
}

#[async_trait]
impl SheetStore for WriteThroughStore {
    async fn save(&self, project_id: &str, sections: &[TableSection]) -> Result<(), StoreError> {
        if let Err(e) = self.cache.save(project_id, sections).await {
            warn!(project_id, error = %e, "local cache write failed; continuing");
        }

        if let Some(remote) = &self.remote {
            let payload = RemotePayload {
                technical_sections: sections.to_vec(),
            };
            if let Err(e) = remote.push(project_id, &payload).await {
                warn!(project_id, error = %e, "remote sync failed; local state kept");
            }
        }
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Result<Option<Vec<TableSection>>, StoreError> {
        self.cache.load(project_id).await
    }
}
