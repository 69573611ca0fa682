use std::sync::Arc;

use crate::application::ports::{
    ChatModel, ChatModelError, Embedder, EmbedderError, VectorStoreError,
};
use crate::domain::{CitedChunk, ConversationTurn};

use super::session::ChatSession;

/// Number of nearest chunks forwarded with each question.
pub const RETRIEVAL_TOP_K: usize = 3;

/// Answer returned when no vector store is bound yet. A benign no-op, not
/// an error: the turn is still recorded.
pub const UNBOUND_FALLBACK: &str = "Please upload documents first to enable the chatbot.";

#[derive(Debug, Clone)]
pub struct ChatAnswer {
    pub answer: String,
    pub sources: Vec<CitedChunk>,
}

/// Conversational retrieval pipeline: embed the question, retrieve the
/// top-k nearest chunks, forward question + context + full prior history
/// to the chat model, and record the exchange.
pub struct ChatService {
    embedder: Arc<dyn Embedder>,
    chat_model: Arc<dyn ChatModel>,
}

impl ChatService {
    pub fn new(embedder: Arc<dyn Embedder>, chat_model: Arc<dyn ChatModel>) -> Self {
        Self {
            embedder,
            chat_model,
        }
    }

    #[tracing::instrument(skip(self, session, question))]
    pub async fn ask(
        &self,
        session: &mut ChatSession,
        question: &str,
    ) -> Result<ChatAnswer, ChatError> {
        let Some(store) = session.store().cloned() else {
            session
                .conversation_mut()
                .push(ConversationTurn::user(question.to_string()));
            session
                .conversation_mut()
                .push(ConversationTurn::assistant(
                    UNBOUND_FALLBACK.to_string(),
                    Vec::new(),
                ));
            return Ok(ChatAnswer {
                answer: UNBOUND_FALLBACK.to_string(),
                sources: Vec::new(),
            });
        };

        let query_embedding = self
            .embedder
            .embed(question)
            .await
            .map_err(ChatError::Embedding)?;

        let results = store
            .search(&query_embedding, RETRIEVAL_TOP_K)
            .await
            .map_err(ChatError::Search)?;

        if results.is_empty() {
            return Err(ChatError::EmptyCollection(
                store.collection_name().to_string(),
            ));
        }

        let context = results
            .iter()
            .map(|r| r.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        // History is everything recorded before this question.
        let answer = self
            .chat_model
            .complete(question, &context, session.conversation().turns())
            .await
            .map_err(ChatError::Completion)?;

        let sources: Vec<CitedChunk> = results
            .into_iter()
            .map(|r| CitedChunk {
                text: r.chunk.text,
                source: r.chunk.metadata.source,
                page: r.chunk.metadata.page,
                score: r.score,
            })
            .collect();

        session
            .conversation_mut()
            .push(ConversationTurn::user(question.to_string()));
        session
            .conversation_mut()
            .push(ConversationTurn::assistant(answer.clone(), sources.clone()));

        tracing::info!(sources = sources.len(), "question answered");

        Ok(ChatAnswer { answer, sources })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("search: {0}")]
    Search(VectorStoreError),
    #[error("completion: {0}")]
    Completion(ChatModelError),
    #[error("collection '{0}' holds no documents; ingest files before querying")]
    EmptyCollection(String),
}
