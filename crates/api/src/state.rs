use std::sync::Arc;

use catalog_core::manager::ContentsManager;
use catalog_core::traced::TracedManager;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Content manager, wrapped with outcome logging.
    pub manager: Arc<dyn ContentsManager>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wrap `manager` in [`TracedManager`] and bundle it with the config.
    pub fn new<M>(manager: M, config: ServerConfig) -> Self
    where
        M: ContentsManager + 'static,
    {
        Self {
            manager: Arc::new(TracedManager::new(manager)),
            config: Arc::new(config),
        }
    }
}
