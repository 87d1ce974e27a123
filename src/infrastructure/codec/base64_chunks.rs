use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::application::ports::AnalysisError;

/// Default decoding window, in base64 characters.
pub const BASE64_CHUNK_CHARS: usize = 32_768;

/// Decode a base64 payload in fixed-size windows.
///
/// Each window is decoded independently and the buffers concatenated in
/// encounter order, so peak intermediate allocation stays at one window
/// rather than an encoded and a decoded copy of the whole payload at once.
/// The window size is clamped to a multiple of 4, which keeps chunk
/// boundaries off base64 quartets.
pub fn decode_base64_chunked(encoded: &str, chunk_chars: usize) -> Result<Vec<u8>, AnalysisError> {
    let window = (chunk_chars.max(4) / 4) * 4;

    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len() / 4 * 3);

    for chunk in bytes.chunks(window) {
        let part = STANDARD
            .decode(chunk)
            .map_err(|e| AnalysisError::MalformedInput(format!("base64: {e}")))?;
        decoded.extend_from_slice(&part);
    }

    Ok(decoded)
}
