use std::sync::Arc;

use crate::infrastructure::logging::BoundaryLogger;

/// Service identity reported by the health endpoint.
pub const SERVICE_NAME: &str = "fivetran-universal-connector";

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    pub logger: Arc<BoundaryLogger>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            logger: Arc::new(BoundaryLogger::new()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
