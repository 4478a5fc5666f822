//! Application State Management
//!
//! `AppState` holds the services shared by every request handler. It is
//! built once at startup by the factory and cloned into each handler.

use std::sync::Arc;

use crate::core::config::Config;
use crate::service::ProductoService;

/// Central application state
#[derive(Clone)]
pub struct AppState {
    /// Product business service
    pub productos: Arc<dyn ProductoService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState from an initialized service
    pub fn new(productos: Arc<dyn ProductoService>, config: Config) -> Self {
        Self {
            productos,
            config: Arc::new(config),
        }
    }
}
