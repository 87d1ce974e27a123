mod diarizer;
mod dispatcher;

pub use diarizer::diarize;
pub use dispatcher::AnalysisDispatcher;
