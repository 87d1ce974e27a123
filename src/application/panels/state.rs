/// Presentation phase of one skill panel. Re-entrant: a new run is
/// allowed from any phase except `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Loading,
    Succeeded,
    Failed { message: String },
}

impl PanelState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::Idle
    }
}
