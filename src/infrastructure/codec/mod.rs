mod base64_chunks;

pub use base64_chunks::{decode_base64_chunked, BASE64_CHUNK_CHARS};
