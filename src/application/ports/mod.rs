mod chat_model;
mod document_loader;
mod embedder;
mod search_result;
mod text_splitter;
mod vector_store;

pub use chat_model::{ChatModel, ChatModelError};
pub use document_loader::{DocumentLoader, DocumentLoaderError};
pub use embedder::{Embedder, EmbedderError};
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_store::{VectorStore, VectorStoreCatalog, VectorStoreError};
