//! Catalog service - manages the salon's service offerings.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateService, Service, UpdateService};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Create a new service; name must be unused
    async fn create_service(&self, data: CreateService) -> AppResult<Service>;

    /// List all services
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    /// Get service by ID
    async fn get_service(&self, id: Uuid) -> AppResult<Service>;

    /// Apply a partial update to a service
    async fn update_service(&self, id: Uuid, changes: UpdateService) -> AppResult<Service>;

    /// Delete a service
    async fn delete_service(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    /// Create new catalog service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn create_service(&self, data: CreateService) -> AppResult<Service> {
        if self.uow.services().find_by_name(&data.name).await?.is_some() {
            return Err(AppError::conflict("Service with this name"));
        }

        let service = Service::new(data);
        self.uow.services().insert(service).await
    }

    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.uow.services().list().await
    }

    async fn get_service(&self, id: Uuid) -> AppResult<Service> {
        self.uow.services().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_service(&self, id: Uuid, changes: UpdateService) -> AppResult<Service> {
        let mut service = self.uow.services().find_by_id(id).await?.ok_or_not_found()?;
        service.apply(changes);
        self.uow.services().update(service).await
    }

    async fn delete_service(&self, id: Uuid) -> AppResult<()> {
        self.uow.services().delete(id).await
    }
}
