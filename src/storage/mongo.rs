//! MongoDB-backed product repository

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::ClientOptions,
    Client, Collection, Database,
};
use tracing::{debug, info};

use super::document::{parse_object_id, set_document, ProductoDocument};
use super::{ProductoRepository, RepositoryError, RepositoryResult};
use crate::types::{CambiosProducto, Producto};

/// Repository over a single MongoDB collection.
///
/// `Collection` is a cheap handle onto the client's shared connection pool,
/// so cloning the repository does not open new connections.
#[derive(Debug, Clone)]
pub struct MongoProductoRepository {
    collection: Collection<ProductoDocument>,
}

impl MongoProductoRepository {
    /// Wrap a collection of an already connected database.
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }

    /// Connect to `uri`, verify the server answers a `ping` within `timeout`,
    /// and return a repository over `database.collection`.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let db = client.database(database);

        tokio::time::timeout(timeout, db.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| RepositoryError::Storage(format!("ping timed out after {:?}", timeout)))??;

        info!(database, collection, "Connected to MongoDB");
        Ok(Self::new(&db, collection))
    }
}

#[async_trait]
impl ProductoRepository for MongoProductoRepository {
    async fn create(&self, producto: Producto) -> RepositoryResult<String> {
        let result = self
            .collection
            .insert_one(ProductoDocument::for_insert(producto))
            .await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Err(RepositoryError::Storage(format!(
                "unexpected inserted id type: {:?}",
                other.element_type()
            ))),
        }
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Producto>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductoDocument> = cursor.try_collect().await?;
        debug!(count = documents.len(), "Listed productos");
        Ok(documents.into_iter().map(Producto::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Producto> {
        let oid = parse_object_id(id)?;
        self.collection
            .find_one(by_id(oid))
            .await?
            .map(Producto::from)
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, id: &str, parcial: Producto) -> RepositoryResult<()> {
        let oid = parse_object_id(id)?;

        let cambios = CambiosProducto::from_parcial(&parcial);
        if cambios.is_empty() {
            return Err(RepositoryError::NoUpdatableFields);
        }

        let result = self
            .collection
            .update_one(by_id(oid), set_document(&cambios))
            .await?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(by_id(oid)).await?;
        debug!(id, deleted = result.deleted_count, "Deleted producto");
        Ok(())
    }
}

fn by_id(oid: ObjectId) -> mongodb::bson::Document {
    doc! { "_id": oid }
}
