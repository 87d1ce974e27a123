use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::application::ports::AnalysisError;

use super::html_strip::strip_markup;

pub struct DocxAdapter;

impl DocxAdapter {
    /// Pull `word/document.xml` out of the zip container and reduce it to
    /// plain text the same way the URL branch treats HTML: tags become
    /// spaces, whitespace runs collapse to one space.
    pub fn extract(data: &[u8]) -> Result<String, AnalysisError> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| AnalysisError::MalformedInput(format!("not a DOCX container: {e}")))?;

        let mut body_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| AnalysisError::MalformedInput(format!("missing document body: {e}")))?
            .read_to_string(&mut body_xml)
            .map_err(|e| AnalysisError::MalformedInput(format!("unreadable document body: {e}")))?;

        Ok(decode_entities(&strip_markup(&body_xml)))
    }
}

// `&amp;` last, or an encoded entity would decode twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
