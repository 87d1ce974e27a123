use async_trait::async_trait;

use super::AnalysisError;

#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Transcribe an audio clip into raw text.
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String, AnalysisError>;
}
