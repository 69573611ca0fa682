use std::sync::Arc;

use docrag::application::ports::{DocumentLoader, DocumentLoaderError};
use docrag::domain::SourceFormat;
use docrag::infrastructure::text_processing::{ExtensionRouter, PlainTextLoader};

fn text_router() -> ExtensionRouter {
    let text_loader: Arc<dyn DocumentLoader> = Arc::new(PlainTextLoader::new());
    ExtensionRouter::new(vec![(SourceFormat::Text, text_loader)])
}

#[tokio::test]
async fn given_a_text_file_when_loading_then_one_document_is_produced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "Plain text body.").unwrap();

    let documents = PlainTextLoader::new().load(&path).await.unwrap();

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].content, "Plain text body.");
    assert_eq!(documents[0].metadata.source, "notes.txt");
    assert_eq!(documents[0].metadata.page, None);
}

#[tokio::test]
async fn given_a_blank_text_file_when_loading_then_no_text_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    std::fs::write(&path, "  \n \t ").unwrap();

    let result = PlainTextLoader::new().load(&path).await;

    assert!(matches!(result, Err(DocumentLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_a_missing_file_when_loading_then_extraction_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = PlainTextLoader::new()
        .load(&dir.path().join("gone.txt"))
        .await;

    assert!(matches!(
        result,
        Err(DocumentLoaderError::ExtractionFailed(_))
    ));
}

#[tokio::test]
async fn given_invalid_utf8_when_loading_then_extraction_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let result = PlainTextLoader::new().load(&path).await;

    assert!(matches!(
        result,
        Err(DocumentLoaderError::ExtractionFailed(_))
    ));
}

#[tokio::test]
async fn given_a_registered_extension_when_routing_then_the_adapter_handles_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routed.txt");
    std::fs::write(&path, "Routed content.").unwrap();

    let documents = text_router().load(&path).await.unwrap();

    assert_eq!(documents[0].content, "Routed content.");
}

#[tokio::test]
async fn given_an_uppercase_extension_when_routing_then_dispatch_still_works() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SHOUTY.TXT");
    std::fs::write(&path, "Case-insensitive dispatch.").unwrap();

    let documents = text_router().load(&path).await.unwrap();

    assert_eq!(documents.len(), 1);
}

#[tokio::test]
async fn given_an_unknown_extension_when_routing_then_it_is_rejected_with_the_extension() {
    let result = text_router().load(std::path::Path::new("slides.pptx")).await;

    match result {
        Err(DocumentLoaderError::UnsupportedFormat(ext)) => assert_eq!(ext, "pptx"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[tokio::test]
async fn given_a_known_format_without_an_adapter_when_routing_then_it_is_rejected() {
    // Router knows only plain text; PDFs resolve to a format but have no
    // adapter registered.
    let result = text_router().load(std::path::Path::new("report.pdf")).await;

    assert!(matches!(
        result,
        Err(DocumentLoaderError::UnsupportedFormat(_))
    ));
}
