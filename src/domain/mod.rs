mod analysis;
mod document;
mod transcript;

pub use analysis::{AnalysisPayload, AnalysisRequest, SelectedFile};
pub use document::{
    DocumentSource, ExtractedDocument, SourceKind, DOCUMENT_MAX_CHARS, DOCX_MIME, URL_MAX_CHARS,
};
pub use transcript::TranscriptionResult;
