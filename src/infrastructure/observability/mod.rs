mod init_tracing;
mod log_text;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use log_text::sanitize_for_log;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use tracing_config::TracingConfig;
