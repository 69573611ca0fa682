use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{DocumentLoader, DocumentLoaderError};
use crate::domain::{Document, DocumentMetadata};

/// Loads a plain-text file as a single document.
#[derive(Default)]
pub struct PlainTextLoader;

impl PlainTextLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentLoader for PlainTextLoader {
    async fn load(&self, path: &Path) -> Result<Vec<Document>, DocumentLoaderError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DocumentLoaderError::ExtractionFailed(e.to_string()))?;

        let content = String::from_utf8(bytes)
            .map_err(|e| DocumentLoaderError::ExtractionFailed(format!("not valid UTF-8: {e}")))?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if content.trim().is_empty() {
            return Err(DocumentLoaderError::NoTextFound(source));
        }

        Ok(vec![Document::new(
            content,
            DocumentMetadata { source, page: None },
        )])
    }
}
