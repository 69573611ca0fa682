use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::VectorStoreCatalog;
use crate::application::services::{ChatService, ChatSession, IngestionService};
use crate::presentation::config::Settings;

/// Shared handler state. The session is the single per-process state
/// container; each handler takes the lock for the duration of one
/// logical action.
#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<IngestionService>,
    pub chat_service: Arc<ChatService>,
    pub catalog: Arc<dyn VectorStoreCatalog>,
    pub session: Arc<RwLock<ChatSession>>,
    pub settings: Settings,
}
