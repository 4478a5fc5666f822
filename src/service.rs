//! Business layer for products
//!
//! Passes reads, creates and deletes straight to the repository. Updates are
//! validated here first, and a repository "no match" becomes a domain
//! `ProductNotFound`.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::storage::{ProductoRepository, RepositoryError};
use crate::types::{CambiosProducto, Producto};

/// Domain errors surfaced to the API layer
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The identifier is blank
    #[error("el ID no puede estar vacío")]
    EmptyIdentifier,

    /// The partial product carries nothing to write
    #[error("no hay campos para actualizar")]
    NoFieldsToUpdate,

    /// The product to update does not exist
    #[error("producto no encontrado")]
    ProductNotFound,

    /// Any other repository failure, unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Product operations exposed to the request handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoService: Send + Sync {
    /// Create a product and return its assigned identifier.
    async fn create(&self, producto: Producto) -> ServiceResult<String>;

    /// All products.
    async fn list_all(&self) -> ServiceResult<Vec<Producto>>;

    /// One product by identifier.
    async fn get_by_id(&self, id: &str) -> ServiceResult<Producto>;

    /// Partially update a product.
    async fn update(&self, id: &str, parcial: Producto) -> ServiceResult<()>;

    /// Delete a product.
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

/// Default service over any repository implementation.
pub struct ProductoServiceImpl<R: ProductoRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductoRepository + ?Sized> ProductoServiceImpl<R> {
    /// Wrap a shared repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ProductoRepository + ?Sized> Clone for ProductoServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

#[async_trait]
impl<R: ProductoRepository + ?Sized> ProductoService for ProductoServiceImpl<R> {
    async fn create(&self, producto: Producto) -> ServiceResult<String> {
        Ok(self.repository.create(producto).await?)
    }

    async fn list_all(&self) -> ServiceResult<Vec<Producto>> {
        Ok(self.repository.list_all().await?)
    }

    async fn get_by_id(&self, id: &str) -> ServiceResult<Producto> {
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn update(&self, id: &str, parcial: Producto) -> ServiceResult<()> {
        if id.trim().is_empty() {
            return Err(ServiceError::EmptyIdentifier);
        }

        if CambiosProducto::from_parcial(&parcial).is_empty() {
            return Err(ServiceError::NoFieldsToUpdate);
        }

        match self.repository.update(id, parcial).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => {
                debug!(id, "Update matched no producto");
                Err(ServiceError::ProductNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockProductoRepository;
    use mockall::predicate::eq;
    use testresult::TestResult;

    const ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

    fn service(repo: MockProductoRepository) -> ProductoServiceImpl<MockProductoRepository> {
        ProductoServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_passes_through() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_create()
            .once()
            .with(eq(Producto::new("A", "", 100.0)))
            .return_once(|_| Ok(ID.to_string()));

        let id = service(repo).create(Producto::new("A", "", 100.0)).await?;
        assert_eq!(id, ID);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_error_passes_through() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_list_all()
            .once()
            .return_once(|| Err(RepositoryError::Storage("fallo".into())));

        let result = service(repo).list_all().await;
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::Storage(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_not_found_is_not_relabelled() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_get_by_id()
            .once()
            .withf(|id| id == ID)
            .return_once(|_| Err(RepositoryError::NotFound));

        let result = service(repo).get_by_id(ID).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_id_rejected_before_repository() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update().never();

        let service = service(repo);
        for id in ["", "   ", "\t\n"] {
            let result = service.update(id, Producto::new("A", "", 1.0)).await;
            assert!(matches!(result, Err(ServiceError::EmptyIdentifier)));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_id_wins_over_empty_body() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update().never();

        let result = service(repo).update("", Producto::default()).await;
        assert!(matches!(result, Err(ServiceError::EmptyIdentifier)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_without_fields_rejected() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update().never();

        let result = service(repo).update(ID, Producto::new("", "", 0.0)).await;
        assert!(matches!(result, Err(ServiceError::NoFieldsToUpdate)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_not_found_relabelled() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update()
            .once()
            .withf(|id, parcial| id == ID && parcial.precio == 5.0)
            .return_once(|_, _| Err(RepositoryError::NotFound));

        let result = service(repo).update(ID, Producto::new("", "", 5.0)).await;
        assert!(matches!(result, Err(ServiceError::ProductNotFound)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_identifier_passes_through() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update()
            .once()
            .return_once(|_, _| Err(RepositoryError::InvalidIdentifier("123".into())));

        let result = service(repo).update("123", Producto::new("A", "", 0.0)).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::InvalidIdentifier(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_success() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_update().once().return_once(|_, _| Ok(()));

        service(repo).update(ID, Producto::new("Nuevo", "", 0.0)).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_passes_through() -> TestResult {
        let mut repo = MockProductoRepository::new();
        repo.expect_delete()
            .once()
            .withf(|id| id == ID)
            .return_once(|_| Ok(()));

        service(repo).delete(ID).await?;
        Ok(())
    }
}
