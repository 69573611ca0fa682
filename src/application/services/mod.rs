mod chat_service;
mod ingestion_service;
mod session;

pub use chat_service::{ChatAnswer, ChatError, ChatService, RETRIEVAL_TOP_K, UNBOUND_FALLBACK};
pub use ingestion_service::{
    IngestReport, IngestionError, IngestionService, SkippedFile, StagedFile,
};
pub use session::ChatSession;
