use std::sync::Arc;

use docrag::application::ports::{
    DocumentLoader, Embedder, EmbedderError, VectorStore,
};
use docrag::application::services::{IngestionError, IngestionService, StagedFile};
use docrag::domain::{Embedding, SourceFormat};
use docrag::infrastructure::persistence::SqliteVectorStore;
use docrag::infrastructure::text_processing::{
    ExtensionRouter, PlainTextLoader, RecursiveCharacterSplitter,
};

struct MockEmbedder;

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Ok(Embedding::new(vec![0.3; 4]))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|_| Embedding::new(vec![0.3; 4])).collect())
    }
}

struct FailingEmbedder;

#[async_trait::async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Err(EmbedderError::ApiRequestFailed("boom".to_string()))
    }

    async fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Err(EmbedderError::ApiRequestFailed("boom".to_string()))
    }
}

fn text_only_service(embedder: Arc<dyn Embedder>) -> IngestionService {
    let text_loader: Arc<dyn DocumentLoader> = Arc::new(PlainTextLoader::new());
    let loader: Arc<dyn DocumentLoader> = Arc::new(ExtensionRouter::new(vec![(
        SourceFormat::Text,
        text_loader,
    )]));
    IngestionService::new(loader, Arc::new(RecursiveCharacterSplitter::new(100, 20)), embedder)
}

fn stage(dir: &std::path::Path, staged_name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(staged_name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn given_a_mixed_batch_when_ingesting_then_unsupported_files_are_skipped_with_a_reason() {
    let staging = tempfile::tempdir().unwrap();
    let storage = tempfile::tempdir().unwrap();
    let service = text_only_service(Arc::new(MockEmbedder));
    let store = SqliteVectorStore::open(storage.path(), "batch").unwrap();

    let files = vec![
        StagedFile {
            filename: "notes.txt".to_string(),
            path: stage(staging.path(), "stage-1.txt", "Readable plain text content."),
        },
        StagedFile {
            filename: "table.csv".to_string(),
            path: stage(staging.path(), "stage-2.csv", "a,b,c"),
        },
    ];

    let report = service.ingest_batch(&files, &store).await.unwrap();

    assert_eq!(report.processed_files, 1);
    assert!(report.chunk_count >= 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].filename, "table.csv");
    assert!(report.skipped[0].reason.contains("unsupported"));

    assert_eq!(store.count().await.unwrap(), report.chunk_count as u64);
}

#[tokio::test]
async fn given_a_staged_file_when_ingesting_then_chunks_carry_the_uploaded_filename() {
    let staging = tempfile::tempdir().unwrap();
    let storage = tempfile::tempdir().unwrap();
    let service = text_only_service(Arc::new(MockEmbedder));
    let store = SqliteVectorStore::open(storage.path(), "names").unwrap();

    let files = vec![StagedFile {
        filename: "quarterly-report.txt".to_string(),
        path: stage(
            staging.path(),
            "upload-93fa.txt",
            "The staging name never leaks into metadata.",
        ),
    }];

    service.ingest_batch(&files, &store).await.unwrap();

    let results = store
        .search(&Embedding::new(vec![0.3; 4]), 5)
        .await
        .unwrap();
    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.chunk.metadata.source, "quarterly-report.txt");
    }
}

#[tokio::test]
async fn given_an_empty_batch_when_ingesting_then_the_report_is_empty_and_nothing_is_stored() {
    let storage = tempfile::tempdir().unwrap();
    let service = text_only_service(Arc::new(MockEmbedder));
    let store = SqliteVectorStore::open(storage.path(), "empty").unwrap();

    let report = service.ingest_batch(&[], &store).await.unwrap();

    assert_eq!(report.processed_files, 0);
    assert_eq!(report.chunk_count, 0);
    assert!(report.skipped.is_empty());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn given_every_file_unreadable_when_ingesting_then_the_batch_still_succeeds() {
    let staging = tempfile::tempdir().unwrap();
    let storage = tempfile::tempdir().unwrap();
    let service = text_only_service(Arc::new(MockEmbedder));
    let store = SqliteVectorStore::open(storage.path(), "all-skipped").unwrap();

    let files = vec![
        StagedFile {
            filename: "missing.txt".to_string(),
            path: staging.path().join("does-not-exist.txt"),
        },
        StagedFile {
            filename: "empty.txt".to_string(),
            path: stage(staging.path(), "stage-empty.txt", "   "),
        },
    ];

    let report = service.ingest_batch(&files, &store).await.unwrap();

    assert_eq!(report.processed_files, 0);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn given_a_failing_embedder_when_ingesting_then_the_batch_aborts() {
    let staging = tempfile::tempdir().unwrap();
    let storage = tempfile::tempdir().unwrap();
    let service = text_only_service(Arc::new(FailingEmbedder));
    let store = SqliteVectorStore::open(storage.path(), "failing").unwrap();

    let files = vec![StagedFile {
        filename: "notes.txt".to_string(),
        path: stage(staging.path(), "stage-3.txt", "Content that never gets embedded."),
    }];

    let result = service.ingest_batch(&files, &store).await;

    assert!(matches!(result, Err(IngestionError::Embedding(_))));
    assert_eq!(store.count().await.unwrap(), 0);
}
