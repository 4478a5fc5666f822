//! Error types and handling for the Producto service
//!
//! Layer-specific errors live next to their layers (`storage`, `service`).
//! This type covers startup: configuration, store connection and serving.

use thiserror::Error;

use crate::storage::RepositoryError;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Producto service
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage layer errors
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}
