//! Core system types and foundations
//!
//! Configuration, error handling, logging setup and application state.

pub mod app_state;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;

// Re-export commonly used items
pub use app_state::AppState;
pub use config::{Config, StorageType};
pub use error::{Error, Result};
pub use factory::create_app_state;
