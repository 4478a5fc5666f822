//! Application Factory
//!
//! Builds the repository for the configured backend, layers the service on
//! top and returns the shared `AppState`.

use std::sync::Arc;

use tracing::info;

use crate::core::app_state::AppState;
use crate::core::config::{Config, StorageType};
use crate::core::error::Result;
use crate::service::ProductoServiceImpl;
use crate::storage::{MemoryProductoRepository, MongoProductoRepository, ProductoRepository};

/// Create the repository selected by `config.storage`.
///
/// For MongoDB this connects and pings the server, so startup fails fast when
/// the database is unreachable.
pub async fn create_repository(config: &Config) -> Result<Arc<dyn ProductoRepository>> {
    let storage = &config.storage;
    info!("Creating repository with storage type: {:?}", storage.storage_type);

    let repository: Arc<dyn ProductoRepository> = match storage.storage_type {
        StorageType::Mongo => Arc::new(
            MongoProductoRepository::connect(
                &storage.mongo_uri,
                &storage.database,
                &storage.collection,
                storage.connect_timeout(),
            )
            .await?,
        ),
        StorageType::Memory => {
            info!("Using in-memory storage, data will not survive a restart");
            Arc::new(MemoryProductoRepository::new())
        }
    };

    Ok(repository)
}

/// Create AppState based on configuration
pub async fn create_app_state(config: Config) -> Result<AppState> {
    let repository = create_repository(&config).await?;
    Ok(app_state_with_repository(repository, config))
}

/// Create AppState over an already constructed repository
pub fn app_state_with_repository(repository: Arc<dyn ProductoRepository>, config: Config) -> AppState {
    let service = ProductoServiceImpl::new(repository);
    AppState::new(Arc::new(service), config)
}
