const MAX_VISIBLE_CHARS: usize = 120;

/// Sanitizes user-provided question text for safe logging: trims,
/// truncates and redacts credential-shaped substrings.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let truncated = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((byte_idx, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..byte_idx],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_credentials(&truncated)
}

fn redact_credentials(text: &str) -> String {
    let markers = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (marker, replacement) in markers {
        if let Some(start) = result.find(marker) {
            let value_end = result[start + marker.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + marker.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..start], replacement, &result[value_end..]);
        }
    }

    result
}
