use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{AnalysisError, SpeechBackend};

use super::backend_error::classify_backend_failure;

pub struct OpenAiSpeechClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionBody {
    #[serde(default)]
    text: String,
}

impl OpenAiSpeechClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    fn file_name_for(mime_type: &str) -> String {
        let ext = mime_type
            .split('/')
            .nth(1)
            .filter(|s| !s.is_empty())
            .unwrap_or("webm");
        format!("audio.{ext}")
    }
}

#[async_trait]
impl SpeechBackend for OpenAiSpeechClient {
    #[tracing::instrument(skip(self, audio), fields(bytes = audio.len()))]
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String, AnalysisError> {
        if self.api_key.is_empty() {
            return Err(AnalysisError::MissingCredential("OpenAI API key"));
        }

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name(Self::file_name_for(mime_type))
            .mime_str(mime_type)
            .map_err(|e| AnalysisError::MalformedInput(format!("mime: {e}")))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio to the transcription endpoint");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::BackendError(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(classify_backend_failure(status, &body));
        }

        let body: TranscriptionBody = response
            .json()
            .await
            .map_err(|e| AnalysisError::BackendError(format!("body: {e}")))?;

        tracing::info!(chars = body.text.len(), "Transcription completed");

        Ok(body.text.trim().to_string())
    }
}
