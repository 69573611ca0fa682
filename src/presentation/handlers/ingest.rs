use std::path::Path;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::application::services::{IngestionError, StagedFile};
use crate::presentation::state::AppState;

use super::error::{config_error_response, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct IngestParams {
    pub collection: Option<String>,
}

#[derive(Serialize)]
pub struct IngestResponse {
    pub collection: String,
    pub processed_files: usize,
    pub chunk_count: usize,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Serialize)]
pub struct SkippedEntry {
    pub filename: String,
    pub reason: String,
}

/// Multipart batch upload. Each file is staged in a named temp file that
/// carries the original extension; temp files live exactly as long as
/// this handler call and deletion tolerates a file that is already gone.
#[tracing::instrument(skip(state, multipart))]
pub async fn ingest_handler(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if let Err(e) = state.settings.validate() {
        tracing::warn!(error = %e, "rejecting ingest: configuration invalid");
        return config_error_response(&e);
    }

    let mut staged: Vec<StagedFile> = Vec::new();
    // Held until the end of the handler; dropping deletes the files.
    let mut temp_files: Vec<NamedTempFile> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("failed to read multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };

        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "failed to read file bytes");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("failed to read file '{}': {}", filename, e),
                    }),
                )
                    .into_response();
            }
        };

        let temp_file = match stage_upload(&filename, &data).await {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "failed to stage upload");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("failed to stage '{}': {}", filename, e),
                    }),
                )
                    .into_response();
            }
        };

        staged.push(StagedFile {
            filename,
            path: temp_file.path().to_path_buf(),
        });
        temp_files.push(temp_file);
    }

    if staged.is_empty() {
        tracing::warn!("ingest request with no files");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "no files uploaded".to_string(),
            }),
        )
            .into_response();
    }

    let collection = params
        .collection
        .unwrap_or_else(|| state.settings.storage.default_collection.clone());

    let store = match state.catalog.open(&collection).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, collection = %collection, "failed to open collection");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to open collection '{}': {}", collection, e),
                }),
            )
                .into_response();
        }
    };

    let report = match state
        .ingestion_service
        .ingest_batch(&staged, store.as_ref())
        .await
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "ingestion batch failed");
            let status = match e {
                IngestionError::Embedding(_) => StatusCode::BAD_GATEWAY,
                IngestionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return (
                status,
                Json(ErrorResponse {
                    error: format!("ingestion failed: {}", e),
                }),
            )
                .into_response();
        }
    };

    // Bind the freshly written collection; conversation history survives.
    state.session.write().await.rebind(store);

    (
        StatusCode::OK,
        Json(IngestResponse {
            collection,
            processed_files: report.processed_files,
            chunk_count: report.chunk_count,
            skipped: report
                .skipped
                .into_iter()
                .map(|s| SkippedEntry {
                    filename: s.filename,
                    reason: s.reason,
                })
                .collect(),
        }),
    )
        .into_response()
}

/// Writes upload bytes to a temp file preserving the original extension,
/// so format dispatch sees the same extension the user uploaded.
async fn stage_upload(filename: &str, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let suffix = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let temp_file = tempfile::Builder::new()
        .prefix("docrag-upload-")
        .suffix(&suffix)
        .tempfile()?;

    tokio::fs::write(temp_file.path(), data).await?;
    Ok(temp_file)
}
