mod backend_error;
mod chat_client;
mod speech_client;

pub use backend_error::classify_backend_failure;
pub use chat_client::OpenAiChatClient;
pub use speech_client::OpenAiSpeechClient;
