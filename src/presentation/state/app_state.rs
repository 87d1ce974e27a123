use std::sync::Arc;

use crate::application::services::AnalysisDispatcher;
use crate::infrastructure::text_processing::DocumentExtractor;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnalysisDispatcher>,
    pub extractor: Arc<DocumentExtractor>,
}
