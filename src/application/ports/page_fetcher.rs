use async_trait::async_trait;

use super::AnalysisError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw body of a remote page.
    async fn fetch(&self, url: &str) -> Result<String, AnalysisError>;
}
