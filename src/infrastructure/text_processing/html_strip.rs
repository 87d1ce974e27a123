use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Reduce an HTML (or XML) body to whitespace-normalized plain text.
/// Script and style blocks are dropped wholesale; every other tag is
/// replaced with a space so adjacent text nodes stay separated.
pub fn strip_markup(markup: &str) -> String {
    let no_script = SCRIPT_BLOCKS.replace_all(markup, "");
    let no_style = STYLE_BLOCKS.replace_all(&no_script, "");
    let text = TAGS.replace_all(&no_style, " ");
    collapse_whitespace(&text)
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out.trim().to_string()
}
