use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{DocumentSource, URL_MAX_CHARS};
use crate::presentation::state::AppState;

use super::{bad_request, error_response};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Inline text wins over a URL when both are supplied; URL-sourced pages
/// go through extraction first. Either way the prompt is bounded before
/// dispatch.
#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let inline_text = request.text.filter(|t| !t.is_empty());

    let content = match inline_text {
        Some(text) => text.chars().take(URL_MAX_CHARS).collect::<String>(),
        None => {
            let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
                tracing::warn!("Summarization request with no content");
                return bad_request("No content to summarize").into_response();
            };

            match state
                .extractor
                .extract(DocumentSource::RemoteUrl(url.trim().to_string()))
                .await
            {
                Ok(extracted) => extracted.text,
                Err(error) => {
                    tracing::error!(error = %error, "Page extraction failed");
                    return error_response(&error).into_response();
                }
            }
        }
    };

    if content.is_empty() {
        tracing::warn!("Nothing left to summarize after extraction");
        return bad_request("No content to summarize").into_response();
    }

    match state.dispatcher.summarize_document(&content).await {
        Ok(summary) => (StatusCode::OK, Json(SummarizeResponse { summary })).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "Summarization failed");
            error_response(&error).into_response()
        }
    }
}
