use async_trait::async_trait;

use super::AnalysisError;

/// Chat-completions backend. The operations differ only in the fixed
/// system instruction and temperature baked into the implementation.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn describe_image(&self, image_base64: &str) -> Result<String, AnalysisError>;

    async fn summarize_transcript(&self, transcript: &str) -> Result<String, AnalysisError>;

    async fn summarize_document(&self, text: &str) -> Result<String, AnalysisError>;
}
