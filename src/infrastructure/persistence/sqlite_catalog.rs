use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{VectorStore, VectorStoreCatalog, VectorStoreError};

use super::SqliteVectorStore;

/// Opens SQLite-backed collections under a configured root directory.
/// An unknown name creates a fresh, empty collection; a known name opens
/// the existing file without re-embedding anything.
pub struct SqliteCatalog {
    root: PathBuf,
}

impl SqliteCatalog {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl VectorStoreCatalog for SqliteCatalog {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    async fn open(&self, collection_name: &str) -> Result<Arc<dyn VectorStore>, VectorStoreError> {
        let root = self.root.clone();
        let name = collection_name.to_string();

        let store = tokio::task::spawn_blocking(move || SqliteVectorStore::open(&root, &name))
            .await
            .map_err(|e| VectorStoreError::OpenFailed(format!("task join error: {e}")))??;

        Ok(Arc::new(store))
    }
}
