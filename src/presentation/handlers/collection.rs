use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::{config_error_response, ErrorResponse};

#[derive(Serialize)]
pub struct LoadCollectionResponse {
    pub collection: String,
    pub chunk_count: u64,
}

/// Binds an existing persisted collection to the session without
/// re-embedding. An unknown name opens empty; queries against it report
/// the empty collection at query time.
#[tracing::instrument(skip(state))]
pub async fn load_collection_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    if let Err(e) = state.settings.validate() {
        tracing::warn!(error = %e, "rejecting collection load: configuration invalid");
        return config_error_response(&e);
    }

    let store = match state.catalog.open(&name).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, collection = %name, "failed to open collection");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to open collection '{}': {}", name, e),
                }),
            )
                .into_response();
        }
    };

    let chunk_count = match store.count().await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, collection = %name, "failed to count collection");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to inspect collection '{}': {}", name, e),
                }),
            )
                .into_response();
        }
    };

    state.session.write().await.rebind(store);

    tracing::info!(collection = %name, chunk_count, "collection bound to session");

    (
        StatusCode::OK,
        Json(LoadCollectionResponse {
            collection: name,
            chunk_count,
        }),
    )
        .into_response()
}
