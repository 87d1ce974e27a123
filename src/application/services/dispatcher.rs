use std::sync::Arc;

use crate::application::ports::{AnalysisError, ChatBackend, SpeechBackend};
use crate::domain::{
    AnalysisPayload, AnalysisRequest, TranscriptionResult, DOCUMENT_MAX_CHARS,
};
use crate::infrastructure::codec::{decode_base64_chunked, BASE64_CHUNK_CHARS};
use crate::infrastructure::observability::sanitize_for_log;

use super::diarizer::diarize;

/// Routes one normalized request to its backend and shapes the outcome.
/// Decoding failures surface before any network call; backend failures
/// arrive already classified by the clients. Nothing is retried.
pub struct AnalysisDispatcher {
    speech: Arc<dyn SpeechBackend>,
    chat: Arc<dyn ChatBackend>,
}

impl AnalysisDispatcher {
    pub fn new(speech: Arc<dyn SpeechBackend>, chat: Arc<dyn ChatBackend>) -> Self {
        Self { speech, chat }
    }

    pub async fn dispatch(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisPayload, AnalysisError> {
        match request {
            AnalysisRequest::Audio { audio, mime_type } => self
                .transcribe_conversation(&audio, &mime_type)
                .await
                .map(AnalysisPayload::Transcription),
            AnalysisRequest::Vision { image } => self
                .describe_image(&image)
                .await
                .map(AnalysisPayload::Description),
            AnalysisRequest::Text { text } => self
                .summarize_document(&text)
                .await
                .map(AnalysisPayload::Summary),
        }
    }

    /// The conversation skill: decode, transcribe, then post-process into
    /// the diarized transcript and a bullet summary. An empty transcript
    /// short-circuits with an empty result and no summary call.
    #[tracing::instrument(skip(self, audio))]
    pub async fn transcribe_conversation(
        &self,
        audio: &str,
        mime_type: &str,
    ) -> Result<TranscriptionResult, AnalysisError> {
        let bytes = decode_base64_chunked(audio, BASE64_CHUNK_CHARS)?;
        tracing::debug!(bytes = bytes.len(), "Audio payload decoded");

        let transcript = self.speech.transcribe(&bytes, mime_type).await?;

        if transcript.is_empty() {
            tracing::info!("Transcription returned no text");
            return Ok(TranscriptionResult::empty());
        }

        let diarized = diarize(&transcript);

        let summary_input: String = transcript.chars().take(DOCUMENT_MAX_CHARS).collect();
        let summary = self.chat.summarize_transcript(&summary_input).await?;

        tracing::info!(
            transcript = %sanitize_for_log(&transcript),
            sentences = diarized.lines().count(),
            "Conversation analysis complete"
        );

        Ok(TranscriptionResult {
            transcript,
            diarized,
            summary,
        })
    }

    #[tracing::instrument(skip(self, image))]
    pub async fn describe_image(&self, image: &str) -> Result<String, AnalysisError> {
        let description = self.chat.describe_image(image).await?;
        tracing::info!(chars = description.len(), "Image description complete");
        Ok(description)
    }

    /// Summarize already-extracted text. Callers guarantee the text is
    /// non-empty and within its ceiling.
    #[tracing::instrument(skip(self, text))]
    pub async fn summarize_document(&self, text: &str) -> Result<String, AnalysisError> {
        let summary = self.chat.summarize_document(text).await?;
        tracing::info!(chars = summary.len(), "Summary complete");
        Ok(summary)
    }
}
