use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentLoader, DocumentLoaderError};
use crate::domain::{Document, SourceFormat};

/// The single dispatch point from file extension to format adapter.
/// Anything outside the closed `SourceFormat` set is rejected here.
pub struct ExtensionRouter {
    adapters: HashMap<SourceFormat, Arc<dyn DocumentLoader>>,
}

impl ExtensionRouter {
    pub fn new(adapters: Vec<(SourceFormat, Arc<dyn DocumentLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentLoader for ExtensionRouter {
    async fn load(&self, path: &Path) -> Result<Vec<Document>, DocumentLoaderError> {
        let format = SourceFormat::from_extension(path).ok_or_else(|| {
            DocumentLoaderError::UnsupportedFormat(
                path.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "(none)".to_string()),
            )
        })?;

        let adapter = self.adapters.get(&format).ok_or_else(|| {
            DocumentLoaderError::UnsupportedFormat(format.as_extension().to_string())
        })?;

        adapter.load(path).await
    }
}
