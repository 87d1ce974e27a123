mod analysis_error;
mod chat_backend;
mod page_fetcher;
mod speech_backend;

pub use analysis_error::AnalysisError;
pub use chat_backend::ChatBackend;
pub use page_fetcher::PageFetcher;
pub use speech_backend::SpeechBackend;
