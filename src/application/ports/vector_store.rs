use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chunk, Embedding};

use super::SearchResult;

/// A named durable set of (chunk, embedding) pairs.
///
/// Insertion is append-only; there are no deletion or versioning
/// semantics. An empty collection is valid and simply yields no results.
#[async_trait]
pub trait VectorStore: Send + Sync {
    fn collection_name(&self) -> &str;

    async fn append(
        &self,
        chunks: &[Chunk],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError>;

    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;

    async fn count(&self) -> Result<u64, VectorStoreError>;
}

/// Opens collections by name under a configured root path, creating them
/// when absent. Loading never re-embeds; an absent collection opens empty.
#[async_trait]
pub trait VectorStoreCatalog: Send + Sync {
    async fn open(&self, collection_name: &str) -> Result<Arc<dyn VectorStore>, VectorStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("failed to open collection: {0}")]
    OpenFailed(String),
    #[error("append failed: {0}")]
    AppendFailed(String),
    #[error("expected one embedding per chunk: {chunks} chunks, {embeddings} embeddings")]
    LengthMismatch { chunks: usize, embeddings: usize },
    #[error("search failed: {0}")]
    SearchFailed(String),
}
