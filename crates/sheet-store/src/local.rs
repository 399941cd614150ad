//! Local filesystem cache - one JSON file per project

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use sheet_model::TableSection;

use crate::{SheetStore, StoreError};

/// JSON-file cache under a base directory, keyed by project id
pub struct LocalCacheStore {
    base_path: PathBuf,
}

impl LocalCacheStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LocalCacheStore {
            base_path: base_path.into(),
        }
    }

    fn file_path(&self, project_id: &str) -> Result<PathBuf, StoreError> {
        // Project ids become file names; anything path-like is refused
        if project_id.is_empty()
            || project_id
                .chars()
                .any(|c| !c.is_alphanumeric() && c != '-' && c != '_')
        {
            return Err(StoreError::InvalidProjectId(project_id.to_string()));
        }
        Ok(self.base_path.join(format!("{project_id}.json")))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl SheetStore for LocalCacheStore {
    async fn save(&self, project_id: &str, sections: &[TableSection]) -> Result<(), StoreError> {
        let path = self.file_path(project_id)?;
        fs::create_dir_all(&self.base_path).await?;
        let json = serde_json::to_vec_pretty(sections)?;
        fs::write(&path, json).await?;
        Ok(())
    }

    async fn load(&self, project_id: &str) -> Result<Option<Vec<TableSection>>, StoreError> {
        let path = self.file_path(project_id)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
