pub mod debug_logger;
pub mod proxy_probe;
pub mod types;

// Re-export commonly used items
pub use debug_logger::{get_debug_logger, DebugLogger};
pub use types::*;
