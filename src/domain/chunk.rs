use uuid::Uuid;

use super::document::{DocumentId, DocumentMetadata};

/// A contiguous, size-bounded span of a document's text.
///
/// Invariant: `0 < text.chars().count() <= chunk_size` for the configured
/// splitter. Chunks inherit their document's metadata and are never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub id: ChunkId,
    pub document_id: DocumentId,
    pub metadata: DocumentMetadata,
    /// Character offset of this chunk within the source document.
    pub char_offset: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(
        text: String,
        document_id: DocumentId,
        metadata: DocumentMetadata,
        char_offset: usize,
    ) -> Self {
        Self {
            id: ChunkId::new(),
            document_id,
            metadata,
            char_offset,
            text,
        }
    }
}
