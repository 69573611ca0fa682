use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static LINE_BREAK_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans up text extracted from PDFs: NFKC normalization, re-joining of
/// words hyphenated across line breaks, and whitespace collapsing while
/// keeping paragraph breaks intact.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = LINE_BREAK_HYPHEN.replace_all(&normalized, "$head$tail");

    let mut out = String::with_capacity(rejoined.len());
    let mut pending_blank = false;

    for line in rejoined.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank = true;
            continue;
        }

        if !out.is_empty() {
            out.push_str(if pending_blank { "\n\n" } else { "\n" });
        }
        push_collapsed(trimmed, &mut out);
        pending_blank = false;
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut last_was_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
}
