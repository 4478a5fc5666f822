//! In-memory product repository
//!
//! Same contract as the MongoDB backend, held in a concurrent map keyed by
//! `ObjectId`. Used for local development and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use super::document::{parse_object_id, ProductoDocument};
use super::{ProductoRepository, RepositoryError, RepositoryResult};
use crate::types::{CambiosProducto, Producto};

/// Lock-sharded map of products. Each operation touches one entry.
#[derive(Debug, Default)]
pub struct MemoryProductoRepository {
    documents: DashMap<ObjectId, ProductoDocument>,
}

impl MemoryProductoRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl ProductoRepository for MemoryProductoRepository {
    async fn create(&self, producto: Producto) -> RepositoryResult<String> {
        let oid = ObjectId::new();
        let mut document = ProductoDocument::for_insert(producto);
        document.id = Some(oid);
        self.documents.insert(oid, document);
        Ok(oid.to_hex())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Producto>> {
        Ok(self
            .documents
            .iter()
            .map(|entry| Producto::from(entry.value().clone()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Producto> {
        let oid = parse_object_id(id)?;
        self.documents
            .get(&oid)
            .map(|entry| Producto::from(entry.value().clone()))
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, id: &str, parcial: Producto) -> RepositoryResult<()> {
        let oid = parse_object_id(id)?;

        let cambios = CambiosProducto::from_parcial(&parcial);
        if cambios.is_empty() {
            return Err(RepositoryError::NoUpdatableFields);
        }

        let mut entry = self.documents.get_mut(&oid).ok_or(RepositoryError::NotFound)?;
        entry.apply(&cambios);
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let oid = parse_object_id(id)?;
        self.documents.remove(&oid);
        Ok(())
    }
}
