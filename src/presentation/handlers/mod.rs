mod chat;
mod collection;
mod error;
mod health;
mod history;
mod ingest;

pub use chat::chat_handler;
pub use collection::load_collection_handler;
pub use error::{config_error_response, ErrorResponse};
pub use health::health_handler;
pub use history::reset_history_handler;
pub use ingest::ingest_handler;
