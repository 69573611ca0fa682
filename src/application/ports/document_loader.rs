use std::path::Path;

use async_trait::async_trait;

use crate::domain::Document;

/// Reads a staged file and produces an ordered sequence of documents:
/// one per page for paginated formats, one for plain text.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<Vec<Document>, DocumentLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no extractable text in {0}")]
    NoTextFound(String),
}
