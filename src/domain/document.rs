/// Hard cut applied to text extracted from files before dispatch.
pub const DOCUMENT_MAX_CHARS: usize = 12_000;

/// Hard cut applied to text fetched from a remote page. Both values are
/// tuned to the downstream token budget and are not configurable.
pub const URL_MAX_CHARS: usize = 16_000;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    PlainText,
    Pdf,
    Docx,
    RemoteUrl,
}

impl SourceKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    /// Character ceiling for text produced from this source.
    pub fn max_chars(&self) -> usize {
        match self {
            Self::PlainText | Self::Pdf | Self::Docx => DOCUMENT_MAX_CHARS,
            Self::RemoteUrl => URL_MAX_CHARS,
        }
    }
}

/// Input to document extraction: either an uploaded file or a page URL.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    File { bytes: Vec<u8>, mime_type: String },
    RemoteUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub source_kind: SourceKind,
    pub text: String,
    pub truncated: bool,
}
