use std::path::Path;

use uuid::Uuid;

/// A single loaded text segment: one page of a PDF, or a whole text file.
///
/// Documents are created by a loader, consumed by the splitter and
/// discarded once chunked.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub metadata: DocumentMetadata,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    /// Original file name as uploaded, not the staging path.
    pub source: String,
    /// 1-based page number for paginated formats.
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self {
            id: DocumentId::new(),
            metadata,
            content,
        }
    }
}

/// Closed set of supported upload formats. Extension dispatch happens in
/// exactly one place; adding a format means adding a variant here and an
/// adapter in the loader router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Pdf,
    Text,
}

impl SourceFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}
