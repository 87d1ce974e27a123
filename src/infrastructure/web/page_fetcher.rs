use async_trait::async_trait;

use crate::application::ports::{AnalysisError, PageFetcher};

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, AnalysisError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::FetchFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            return Err(AnalysisError::FetchFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AnalysisError::FetchFailed(format!("body: {e}")))
    }
}
