use std::sync::Arc;

use crate::application::ports::{AnalysisError, PageFetcher};
use crate::domain::{DocumentSource, ExtractedDocument, SourceKind};

use super::docx_adapter::DocxAdapter;
use super::html_strip::strip_markup;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Turns any supported input into bounded plain text. Each source kind has
/// its own extraction rule and character ceiling; the final text is
/// hard-cut at the ceiling with no word-boundary awareness.
pub struct DocumentExtractor {
    fetcher: Arc<dyn PageFetcher>,
    pdf: PdfAdapter,
}

impl DocumentExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, max_pdf_pages: usize) -> Self {
        Self {
            fetcher,
            pdf: PdfAdapter::new(max_pdf_pages),
        }
    }

    #[tracing::instrument(skip(self, source))]
    pub async fn extract(&self, source: DocumentSource) -> Result<ExtractedDocument, AnalysisError> {
        let (kind, text) = match source {
            DocumentSource::RemoteUrl(url) => {
                let body = self.fetcher.fetch(&url).await?;
                (SourceKind::RemoteUrl, strip_markup(&body))
            }
            DocumentSource::File { bytes, mime_type } => {
                match SourceKind::from_mime(&mime_type) {
                    Some(kind @ SourceKind::PlainText) => (kind, PlainTextAdapter::extract(&bytes)?),
                    Some(kind @ SourceKind::Pdf) => {
                        (kind, self.pdf.extract(&bytes, kind.max_chars()).await?)
                    }
                    Some(kind @ SourceKind::Docx) => (kind, DocxAdapter::extract(&bytes)?),
                    _ => return Err(AnalysisError::UnsupportedFormat(mime_type)),
                }
            }
        };

        let (text, truncated) = truncate_chars(text, kind.max_chars());

        tracing::debug!(
            kind = ?kind,
            chars = text.chars().count(),
            truncated,
            "Document extracted"
        );

        Ok(ExtractedDocument {
            source_kind: kind,
            text,
            truncated,
        })
    }
}

/// Hard cut at `ceiling` characters. Returns whether anything was dropped.
fn truncate_chars(text: String, ceiling: usize) -> (String, bool) {
    match text.char_indices().nth(ceiling) {
        Some((byte_index, _)) => {
            let mut text = text;
            text.truncate(byte_index);
            (text, true)
        }
        None => (text, false),
    }
}
