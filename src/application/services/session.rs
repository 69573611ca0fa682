use std::sync::Arc;

use crate::application::ports::VectorStore;
use crate::domain::Conversation;

/// Per-session mutable state: the bound vector store (absent until the
/// first ingestion or collection load) and the conversation buffer.
///
/// Passed explicitly to every operation rather than living as ambient
/// global state, so the pipeline stays testable across sessions.
#[derive(Default)]
pub struct ChatSession {
    store: Option<Arc<dyn VectorStore>>,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> Option<&Arc<dyn VectorStore>> {
        self.store.as_ref()
    }

    /// Replaces the bound store. Conversation history is untouched.
    pub fn rebind(&mut self, store: Arc<dyn VectorStore>) {
        self.store = Some(store);
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub(crate) fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    /// Clears the conversation buffer. The bound store is untouched.
    pub fn reset_history(&mut self) {
        self.conversation.clear();
    }
}
