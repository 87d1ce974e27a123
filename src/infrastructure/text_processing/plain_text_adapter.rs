use crate::application::ports::AnalysisError;

pub struct PlainTextAdapter;

impl PlainTextAdapter {
    pub fn extract(data: &[u8]) -> Result<String, AnalysisError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| AnalysisError::MalformedInput(format!("utf-8: {e}")))
    }
}
