use async_trait::async_trait;

use crate::domain::ConversationTurn;

/// Remote chat-completion service. The pipeline forwards the question,
/// the retrieved context and the full prior history in one call.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(
        &self,
        question: &str,
        context: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ChatModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatModelError {
    #[error("chat api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("chat rate limited")]
    RateLimited,
    #[error("invalid chat response: {0}")]
    InvalidResponse(String),
}
