use std::path::Path;

use docrag::domain::{Document, DocumentId, DocumentMetadata, SourceFormat};

#[test]
fn given_known_extensions_when_resolving_format_then_the_right_variant_is_chosen() {
    assert_eq!(
        SourceFormat::from_extension(Path::new("report.pdf")),
        Some(SourceFormat::Pdf)
    );
    assert_eq!(
        SourceFormat::from_extension(Path::new("notes.txt")),
        Some(SourceFormat::Text)
    );
}

#[test]
fn given_uppercase_extension_when_resolving_format_then_case_is_ignored() {
    assert_eq!(
        SourceFormat::from_extension(Path::new("REPORT.PDF")),
        Some(SourceFormat::Pdf)
    );
}

#[test]
fn given_unknown_or_missing_extension_when_resolving_format_then_none_is_returned() {
    assert_eq!(SourceFormat::from_extension(Path::new("slides.pptx")), None);
    assert_eq!(SourceFormat::from_extension(Path::new("README")), None);
}

#[test]
fn given_a_format_when_asking_its_extension_then_it_round_trips() {
    for format in [SourceFormat::Pdf, SourceFormat::Text] {
        let path = format!("file.{}", format.as_extension());
        assert_eq!(SourceFormat::from_extension(Path::new(&path)), Some(format));
    }
}

#[test]
fn given_content_and_metadata_when_creating_document_then_assigns_new_id() {
    let first = Document::new(
        "body".to_string(),
        DocumentMetadata {
            source: "a.txt".to_string(),
            page: None,
        },
    );
    let second = Document::new(
        "body".to_string(),
        DocumentMetadata {
            source: "a.txt".to_string(),
            page: None,
        },
    );

    assert_ne!(first.id, second.id);
    assert_ne!(DocumentId::new(), first.id);
}
