const MAX_VISIBLE_CHARS: usize = 100;

/// Prepare user-supplied text (transcripts, documents, prompts) for log
/// output: bound the length and redact credential-looking substrings.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((byte_index, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..byte_index],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
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
            let end = result[start + marker.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + marker.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..start], replacement, &result[end..]);
        }
    }

    result
}
