use docrag::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_a_hyphenated_line_break_when_sanitizing_then_the_word_is_rejoined() {
    let raw = "This text contains informa-\ntion split across lines.";
    let cleaned = sanitize_extracted_text(raw);
    assert!(cleaned.contains("information"));
}

#[test]
fn given_repeated_whitespace_when_sanitizing_then_it_collapses_to_single_spaces() {
    let cleaned = sanitize_extracted_text("too    many\t\tspaces here");
    assert_eq!(cleaned, "too many spaces here");
}

#[test]
fn given_a_paragraph_break_when_sanitizing_then_it_is_preserved() {
    let cleaned = sanitize_extracted_text("first paragraph\n\nsecond paragraph");
    assert_eq!(cleaned, "first paragraph\n\nsecond paragraph");
}

#[test]
fn given_multiple_blank_lines_when_sanitizing_then_they_collapse_to_one_break() {
    let cleaned = sanitize_extracted_text("first\n\n\n\nsecond");
    assert_eq!(cleaned, "first\n\nsecond");
}

#[test]
fn given_compatibility_characters_when_sanitizing_then_they_are_normalized() {
    // U+FB01 LATIN SMALL LIGATURE FI
    let cleaned = sanitize_extracted_text("ﬁle");
    assert_eq!(cleaned, "file");
}

#[test]
fn given_padded_lines_when_sanitizing_then_edges_are_trimmed() {
    let cleaned = sanitize_extracted_text("   padded line   \n   another   ");
    assert_eq!(cleaned, "padded line\nanother");
}

#[test]
fn given_empty_input_when_sanitizing_then_the_result_is_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
    assert_eq!(sanitize_extracted_text("\n\n\n"), "");
}
