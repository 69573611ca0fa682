use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::ChatError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::{config_error_response, ErrorResponse};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<SourceChunk>,
}

#[derive(Serialize)]
pub struct SourceChunk {
    pub text: String,
    pub source: String,
    pub page: Option<u32>,
    pub score: f32,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    if request.question.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "question must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(question = %sanitize_prompt(&request.question), "processing question");

    let mut session = state.session.write().await;

    // The unbound path answers with a fixed fallback and touches no
    // remote service, so the credential check only applies once a store
    // is bound.
    if session.store().is_some() {
        if let Err(e) = state.settings.validate() {
            tracing::warn!(error = %e, "rejecting chat: configuration invalid");
            return config_error_response(&e);
        }
    }

    match state.chat_service.ask(&mut session, &request.question).await {
        Ok(answer) => {
            let sources = answer
                .sources
                .into_iter()
                .map(|s| SourceChunk {
                    text: s.text,
                    source: s.source,
                    page: s.page,
                    score: s.score,
                })
                .collect();

            (
                StatusCode::OK,
                Json(ChatResponse {
                    answer: answer.answer,
                    sources,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "chat request failed");
            let status = match e {
                ChatError::EmptyCollection(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ChatError::Embedding(_) | ChatError::Completion(_) => StatusCode::BAD_GATEWAY,
                ChatError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: format!("chat failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
