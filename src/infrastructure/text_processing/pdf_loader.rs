use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfFile;

use crate::application::ports::{DocumentLoader, DocumentLoaderError};
use crate::domain::{Document, DocumentMetadata};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts one document per PDF page. Parsing runs on a blocking task
/// with a hard timeout; pages without extractable text are dropped.
#[derive(Default)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<(u32, String)>, DocumentLoaderError> {
        let pdf = PdfFile::load(path).map_err(|e| {
            DocumentLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let mut pages = Vec::new();
        for (&page_number, _) in pdf.get_pages().iter() {
            let text = pdf.extract_text(&[page_number]).unwrap_or_default();
            if !text.trim().is_empty() {
                pages.push((page_number, text));
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl DocumentLoader for PdfLoader {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn load(&self, path: &Path) -> Result<Vec<Document>, DocumentLoaderError> {
        let display_name = display_name(path);
        let owned_path: PathBuf = path.to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned_path)),
        )
        .await
        .map_err(|_| DocumentLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| DocumentLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let documents: Vec<Document> = pages
            .into_iter()
            .filter_map(|(page_number, text)| {
                let sanitized = sanitize_extracted_text(&text);
                if sanitized.is_empty() {
                    return None;
                }
                Some(Document::new(
                    sanitized,
                    DocumentMetadata {
                        source: display_name.clone(),
                        page: Some(page_number),
                    },
                ))
            })
            .collect();

        if documents.is_empty() {
            return Err(DocumentLoaderError::NoTextFound(display_name));
        }

        Ok(documents)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
