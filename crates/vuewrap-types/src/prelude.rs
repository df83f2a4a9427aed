pub use crate::error::{Error, VwResult};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
