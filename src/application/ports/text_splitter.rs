use async_trait::async_trait;

use crate::domain::{Chunk, Document};

/// Splits documents into overlapping, size-bounded chunks carrying their
/// document's metadata. Deterministic for identical input and settings.
#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split(&self, documents: &[Document]) -> Result<Vec<Chunk>, TextSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("splitting failed: {0}")]
    SplittingFailed(String),
}
