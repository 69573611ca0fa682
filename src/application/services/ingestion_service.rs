use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    DocumentLoader, Embedder, EmbedderError, TextSplitter, TextSplitterError, VectorStore,
    VectorStoreError,
};
use crate::domain::Chunk;

/// An uploaded file staged on disk for one ingestion call. The caller owns
/// the temp-file lifecycle; `path` is only valid for the duration of the
/// batch.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub processed_files: usize,
    pub chunk_count: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Drives load -> split -> embed -> append for a batch of uploads.
///
/// Per-file failures (unsupported type, extraction error) skip the file
/// with a warning and continue. Remote embedding and storage failures
/// abort the batch and propagate; nothing is retried.
pub struct IngestionService {
    loader: Arc<dyn DocumentLoader>,
    splitter: Arc<dyn TextSplitter>,
    embedder: Arc<dyn Embedder>,
}

impl IngestionService {
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        splitter: Arc<dyn TextSplitter>,
        embedder: Arc<dyn Embedder>,
    ) -> Self {
        Self {
            loader,
            splitter,
            embedder,
        }
    }

    #[tracing::instrument(skip(self, files, store), fields(files = files.len(), collection = %store.collection_name()))]
    pub async fn ingest_batch(
        &self,
        files: &[StagedFile],
        store: &dyn VectorStore,
    ) -> Result<IngestReport, IngestionError> {
        let mut report = IngestReport::default();
        let mut chunks: Vec<Chunk> = Vec::new();

        for file in files {
            match self.process_file(file).await {
                Ok(file_chunks) => {
                    report.processed_files += 1;
                    chunks.extend(file_chunks);
                }
                Err(reason) => {
                    tracing::warn!(filename = %file.filename, %reason, "skipping file");
                    report.skipped.push(SkippedFile {
                        filename: file.filename.clone(),
                        reason,
                    });
                }
            }
        }

        if chunks.is_empty() {
            return Ok(report);
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        store.append(&chunks, &embeddings).await?;

        report.chunk_count = chunks.len();
        tracing::info!(
            processed_files = report.processed_files,
            chunk_count = report.chunk_count,
            skipped = report.skipped.len(),
            "ingestion batch complete"
        );

        Ok(report)
    }

    async fn process_file(&self, file: &StagedFile) -> Result<Vec<Chunk>, String> {
        let mut documents = self
            .loader
            .load(&file.path)
            .await
            .map_err(|e| e.to_string())?;

        // Loaders only see the staging path; restore the uploaded name.
        for document in &mut documents {
            document.metadata.source = file.filename.clone();
        }

        self.splitter
            .split(&documents)
            .await
            .map_err(|e: TextSplitterError| e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("storage: {0}")]
    Storage(#[from] VectorStoreError),
}
