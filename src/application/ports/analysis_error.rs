/// Unified failure taxonomy across all three skills.
///
/// Extraction and decoding failures are raised before any network call;
/// backend failures are classified at the client boundary so callers never
/// see a raw transport error. No variant is ever retried.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Missing {0}")]
    MissingCredential(&'static str),
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("backend quota exhausted: {0}")]
    QuotaExceeded(String),
    #[error("backend error: {0}")]
    BackendError(String),
}

impl AnalysisError {
    /// User-facing copy for this failure. The raw detail stays in the
    /// `Display` output and the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential(name) => {
                format!("The service is not configured: missing {name}.")
            }
            Self::UnsupportedFormat(_) => {
                "Unsupported input type. Accepted: .txt, .pdf or .docx files, images, \
                 audio recordings, or a page URL."
                    .to_string()
            }
            Self::MalformedInput(_) => "The input could not be read. Please try again.".to_string(),
            Self::FetchFailed(reason) => format!("The page could not be fetched: {reason}"),
            Self::QuotaExceeded(_) => {
                "OpenAI quota exceeded for this skill. Please add billing or switch \
                 provider; the other skills still work."
                    .to_string()
            }
            Self::BackendError(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}
