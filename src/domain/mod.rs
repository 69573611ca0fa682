mod chunk;
mod conversation;
mod document;
mod embedding;

pub use chunk::{Chunk, ChunkId};
pub use conversation::{CitedChunk, Conversation, ConversationTurn, TurnRole};
pub use document::{Document, DocumentId, DocumentMetadata, SourceFormat};
pub use embedding::Embedding;
