use std::io::Write;
use std::time::Duration;

use pdf_oxide::PdfDocument;

use crate::application::ports::AnalysisError;

use super::page_text::collapse_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Page-by-page PDF text extraction with a hard page cap. Parsing is CPU
/// bound and runs on a blocking thread under a timeout.
pub struct PdfAdapter {
    max_pages: usize,
}

impl PdfAdapter {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    fn extract_pages(
        path: &std::path::Path,
        max_pages: usize,
        max_chars: usize,
    ) -> Result<String, AnalysisError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| AnalysisError::MalformedInput(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            AnalysisError::MalformedInput(format!("failed to read page count: {e}"))
        })?;

        let mut combined = String::new();
        let mut char_count = 0usize;

        for page_index in 0..page_count.min(max_pages) {
            let text = doc.extract_text(page_index).unwrap_or_default();
            let line = collapse_page_text(&text);

            char_count += line.chars().count() + 1;
            combined.push_str(&line);
            combined.push('\n');

            // Stop reading pages once the ceiling is already exceeded;
            // the caller applies the exact cut.
            if char_count > max_chars {
                break;
            }
        }

        Ok(combined)
    }

    pub async fn extract(&self, data: &[u8], max_chars: usize) -> Result<String, AnalysisError> {
        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| AnalysisError::MalformedInput(format!("failed to stage PDF: {e}")))?;

        temp_file
            .write_all(data)
            .map_err(|e| AnalysisError::MalformedInput(format!("failed to stage PDF: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();
        let max_pages = self.max_pages;

        let combined = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                Self::extract_pages(&temp_path, max_pages, max_chars)
            }),
        )
        .await
        .map_err(|_| AnalysisError::MalformedInput("PDF extraction timed out".to_string()))?
        .map_err(|e| AnalysisError::MalformedInput(format!("task join error: {e}")))??;

        tracing::info!(chars = combined.len(), "PDF text extraction complete");

        Ok(combined)
    }
}
