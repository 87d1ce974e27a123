use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::application::ports::AnalysisError;
use crate::application::services::AnalysisDispatcher;
use crate::domain::SelectedFile;

use super::state::PanelState;

/// Controller for the image skill. A non-image file is rejected locally;
/// the dispatcher is never involved.
#[derive(Default)]
pub struct ImagePanel {
    file: Option<SelectedFile>,
    state: PanelState,
    output: Option<String>,
}

impl ImagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn can_run(&self) -> bool {
        self.file.is_some() && !self.state.is_loading()
    }

    pub async fn analyze(&mut self, dispatcher: &AnalysisDispatcher) {
        if !self.can_run() {
            return;
        }
        let Some(file) = self.file.clone() else {
            return;
        };

        if !file.is_image() {
            self.fail(AnalysisError::UnsupportedFormat(file.mime_type));
            return;
        }

        self.state = PanelState::Loading;

        let image = STANDARD.encode(&file.bytes);
        match dispatcher.describe_image(&image).await {
            Ok(description) => {
                self.output = Some(description);
                self.state = PanelState::Succeeded;
            }
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: AnalysisError) {
        tracing::warn!(error = %error, "Image analysis failed");
        self.state = PanelState::Failed {
            message: error.user_message(),
        };
    }
}
