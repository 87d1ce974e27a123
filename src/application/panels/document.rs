use crate::application::ports::AnalysisError;
use crate::application::services::AnalysisDispatcher;
use crate::domain::{DocumentSource, SelectedFile};
use crate::infrastructure::text_processing::DocumentExtractor;

use super::state::PanelState;

/// Controller for the document skill. Accepts either an uploaded file or
/// a page URL; the URL takes precedence when both are set. Extraction
/// failures (unsupported type, unreadable file, unreachable page) surface
/// before any backend call.
#[derive(Default)]
pub struct DocumentPanel {
    file: Option<SelectedFile>,
    url: Option<String>,
    state: PanelState,
    output: Option<String>,
}

impl DocumentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// A blank URL counts as no URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into().trim().to_string();
        self.url = if url.is_empty() { None } else { Some(url) };
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn can_run(&self) -> bool {
        (self.file.is_some() || self.url.is_some()) && !self.state.is_loading()
    }

    pub async fn summarize(
        &mut self,
        extractor: &DocumentExtractor,
        dispatcher: &AnalysisDispatcher,
    ) {
        if !self.can_run() {
            return;
        }

        let source = if let Some(url) = self.url.clone() {
            DocumentSource::RemoteUrl(url)
        } else if let Some(file) = self.file.clone() {
            DocumentSource::File {
                bytes: file.bytes,
                mime_type: file.mime_type,
            }
        } else {
            return;
        };

        self.state = PanelState::Loading;

        let extracted = match extractor.extract(source).await {
            Ok(extracted) => extracted,
            Err(error) => return self.fail(error),
        };

        if extracted.text.is_empty() {
            return self.fail(AnalysisError::MalformedInput(
                "no content to summarize".to_string(),
            ));
        }

        match dispatcher.summarize_document(&extracted.text).await {
            Ok(summary) => {
                self.output = Some(summary);
                self.state = PanelState::Succeeded;
            }
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: AnalysisError) {
        tracing::warn!(error = %error, "Document summarization failed");
        self.state = PanelState::Failed {
            message: error.user_message(),
        };
    }
}
