use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::application::ports::AnalysisError;
use crate::application::services::AnalysisDispatcher;
use crate::domain::{SelectedFile, TranscriptionResult};

use super::state::PanelState;

/// Controller for the conversation skill: guards input selection, runs
/// the audio pipeline, and maps the outcome onto the panel state. A
/// failure never clears previously displayed output.
#[derive(Default)]
pub struct ConversationPanel {
    file: Option<SelectedFile>,
    state: PanelState,
    output: Option<TranscriptionResult>,
}

impl ConversationPanel {
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

    pub fn output(&self) -> Option<&TranscriptionResult> {
        self.output.as_ref()
    }

    /// The run trigger is disabled while loading and while no file is
    /// selected.
    pub fn can_run(&self) -> bool {
        self.file.is_some() && !self.state.is_loading()
    }

    pub async fn process(&mut self, dispatcher: &AnalysisDispatcher) {
        if !self.can_run() {
            return;
        }
        let Some(file) = self.file.clone() else {
            return;
        };

        self.state = PanelState::Loading;

        let audio = STANDARD.encode(&file.bytes);
        match dispatcher
            .transcribe_conversation(&audio, &file.mime_type)
            .await
        {
            Ok(result) => {
                self.output = Some(result);
                self.state = PanelState::Succeeded;
            }
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: AnalysisError) {
        tracing::warn!(error = %error, "Conversation analysis failed");
        self.state = PanelState::Failed {
            message: error.user_message(),
        };
    }
}
