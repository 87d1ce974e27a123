/// Output of the conversation skill. `diarized` is derived from
/// `transcript` by the sentence-alternation heuristic; `summary` comes
/// from a separate backend call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub diarized: String,
    pub summary: String,
}

impl TranscriptionResult {
    pub fn empty() -> Self {
        Self::default()
    }
}
