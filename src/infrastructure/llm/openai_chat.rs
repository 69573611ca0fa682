use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatModel, ChatModelError};
use crate::domain::ConversationTurn;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a helpful assistant answering questions about the user's \
uploaded documents. Use only the provided context to answer. If the context does not contain \
the answer, say that you don't know.";

/// OpenAI chat completions adapter. Retrieved context goes into the
/// system message; prior conversation turns are replayed verbatim.
pub struct OpenAiChatModel {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiChatModel {
    pub fn new(api_key: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    fn build_messages(
        question: &str,
        context: &str,
        history: &[ConversationTurn],
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);

        messages.push(ChatMessage {
            role: "system",
            content: format!("{}\n\nContext:\n{}", SYSTEM_PROMPT, context),
        });

        for turn in history {
            messages.push(ChatMessage {
                role: turn.role.as_str(),
                content: turn.content.clone(),
            });
        }

        messages.push(ChatMessage {
            role: "user",
            content: question.to_string(),
        });

        messages
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    #[tracing::instrument(skip(self, question, context, history), fields(model = %self.model, history_turns = history.len()))]
    async fn complete(
        &self,
        question: &str,
        context: &str,
        history: &[ConversationTurn],
    ) -> Result<String, ChatModelError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(question, context, history),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatModelError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ChatModelError::InvalidResponse("no completion choices".to_string()))
    }
}
