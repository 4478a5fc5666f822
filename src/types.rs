/// Type definitions for the Producto service
///
/// Domain entities shared by the storage, service and API layers.

/// Producto entity and its partial-update field set
pub mod producto;

// Re-export commonly used types for convenience
pub use producto::{CambiosProducto, Producto};
