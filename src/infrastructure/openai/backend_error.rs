use serde::Deserialize;

use crate::application::ports::AnalysisError;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Classify a non-2xx backend response. Quota exhaustion is distinguished
/// so callers can show an actionable message; everything else keeps the
/// raw body for diagnostics.
pub fn classify_backend_failure(status: reqwest::StatusCode, body: &str) -> AnalysisError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if parsed.error.and_then(|e| e.kind).as_deref() == Some("insufficient_quota") {
            return AnalysisError::QuotaExceeded(format!("status {status}: {body}"));
        }
    }

    AnalysisError::BackendError(format!("status {status}: {body}"))
}
