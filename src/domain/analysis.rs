use super::transcript::TranscriptionResult;

/// One user action's worth of input, normalized for dispatch.
///
/// Audio and vision payloads travel base64-encoded exactly as the client
/// produced them; only the audio payload is decoded before upload.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Audio { audio: String, mime_type: String },
    Vision { image: String },
    Text { text: String },
}

/// Terminal success value of one dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPayload {
    Transcription(TranscriptionResult),
    Description(String),
    Summary(String),
}

/// A file the user selected in a panel: raw bytes plus the declared mime type.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }
}
