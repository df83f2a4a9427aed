pub use vuewrap_core::app::App;
pub use vuewrap_types::error::{Error, VwResult};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
