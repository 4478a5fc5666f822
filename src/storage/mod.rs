//! Storage layer for the Producto service
//!
//! Single-document CRUD against one logical collection, plus translation
//! between the external hex identifier and the store's native `ObjectId`.
//! Two backends implement [`ProductoRepository`]: MongoDB and an in-process map.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Producto;

/// Stored document representation and identifier parsing
pub mod document;

/// MongoDB backend
pub mod mongo;

/// In-memory backend
pub mod memory;

// Re-export main storage types
pub use document::{parse_object_id, ProductoDocument};
pub use memory::MemoryProductoRepository;
pub use mongo::MongoProductoRepository;

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The identifier is not a valid 24-character hex `ObjectId`
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// No document matched the identifier
    #[error("Document not found")]
    NotFound,

    /// A partial update carried no non-empty field
    #[error("No valid fields to update")]
    NoUpdatableFields,

    /// Transport, database or (de)serialization failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Storage(value.to_string())
    }
}

/// Result alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Data access contract for the `productos` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// Insert a new product. The store assigns the identifier, returned in hex form.
    async fn create(&self, producto: Producto) -> RepositoryResult<String>;

    /// Every stored product, in store-defined order.
    async fn list_all(&self) -> RepositoryResult<Vec<Producto>>;

    /// Fetch one product by its hex identifier.
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Producto>;

    /// Merge the non-empty fields of `parcial` into the stored product.
    ///
    /// Fails with `NoUpdatableFields` if nothing would be written and with
    /// `NotFound` if no document matched.
    async fn update(&self, id: &str, parcial: Producto) -> RepositoryResult<()>;

    /// Delete by identifier. Deleting an absent product succeeds.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
