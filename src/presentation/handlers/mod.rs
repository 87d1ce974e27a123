mod describe;
mod health;
mod summarize;
mod transcribe;

pub use describe::describe_handler;
pub use health::health_handler;
pub use summarize::summarize_handler;
pub use transcribe::transcribe_handler;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::application::ports::AnalysisError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a taxonomy failure onto the edge status and `{error}` body. Quota
/// exhaustion keeps its distinguished 402 so clients can show an
/// actionable message instead of a generic retry.
fn error_response(error: &AnalysisError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        AnalysisError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AnalysisError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AnalysisError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        AnalysisError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::QuotaExceeded(_) => StatusCode::PAYMENT_REQUIRED,
        AnalysisError::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
