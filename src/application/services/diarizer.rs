/// Attribute transcript sentences to alternating speakers.
///
/// This is a textual heuristic, not acoustic diarization: sentences are
/// split on sentence-final punctuation and labeled `Speaker 1` /
/// `Speaker 2` by position alone. It has no awareness of actual speaker
/// turns and is documented as a placeholder.
pub fn diarize(transcript: &str) -> String {
    split_sentences(transcript)
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let speaker = if index % 2 == 0 { 1 } else { 2 };
            format!("Speaker {speaker}: {sentence}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on `.` `!` `?` followed by whitespace (or end of input), keeping
/// the punctuation with the preceding sentence. Empty fragments are
/// dropped after trimming.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        if matches!(ch, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                Some(next) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
