use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::{bad_request, error_response};

const DEFAULT_AUDIO_MIME: &str = "audio/webm";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
    pub diarized: String,
    pub summary: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse {
    if request.audio.is_empty() {
        tracing::warn!("Transcription request with no audio payload");
        return bad_request("No audio data provided").into_response();
    }

    let mime_type = request
        .mime_type
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_AUDIO_MIME.to_string());

    match state
        .dispatcher
        .transcribe_conversation(&request.audio, &mime_type)
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcript: result.transcript,
                diarized: result.diarized,
                summary: result.summary,
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(error = %error, "Transcription failed");
            error_response(&error).into_response()
        }
    }
}
