mod conversation;
mod document;
mod image;
mod state;

pub use conversation::ConversationPanel;
pub use document::DocumentPanel;
pub use image::ImagePanel;
pub use state::PanelState;
