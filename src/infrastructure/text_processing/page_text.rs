use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::html_strip::collapse_whitespace;

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Flatten one PDF page into a single whitespace-normalized line.
/// NFKC normalization folds ligatures the extractor tends to emit, and
/// words hyphenated across line breaks are rejoined before the collapse.
pub fn collapse_page_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let joined = HYPHEN_BREAK.replace_all(&normalized, "$prefix$suffix");
    collapse_whitespace(&joined)
}
