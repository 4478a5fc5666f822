//! Producto Service - REST CRUD microservice for products
//!
//! Exposes create, list, get, partial update and delete over HTTP/JSON and
//! persists products in a MongoDB collection, or in memory for local runs
//! and tests.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;
pub mod types;

// Main functional modules
pub mod storage;
pub mod service;
pub mod api;

// Re-export commonly used items for convenience
pub use core::{Config, Error, Result};
pub use service::{ProductoService, ProductoServiceImpl, ServiceError};
pub use types::{CambiosProducto, Producto};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
