use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::presentation::state::AppState;

/// Clears the conversation buffer. The bound vector store is untouched
/// and remains queryable afterwards.
#[tracing::instrument(skip(state))]
pub async fn reset_history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    let cleared = session.conversation().len();
    session.reset_history();

    tracing::info!(cleared_turns = cleared, "conversation history cleared");

    StatusCode::NO_CONTENT
}
