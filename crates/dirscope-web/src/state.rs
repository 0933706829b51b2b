use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared server state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}
