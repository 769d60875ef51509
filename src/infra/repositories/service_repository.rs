//! Service repository - persistence for the salon service catalog.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::conflict_on_unique;
use super::entities::service::{self, Entity as ServiceEntity};
use crate::domain::Service;
use crate::errors::{AppError, AppResult};

const CONFLICT_ENTITY: &str = "Service with this name";

/// Data access contract for catalog services
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find service by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>>;

    /// Find service by name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Service>>;

    /// Persist a new service
    async fn insert(&self, service: Service) -> AppResult<Service>;

    /// Persist field changes to an existing service
    async fn update(&self, service: Service) -> AppResult<Service>;

    /// List all services
    async fn list(&self) -> AppResult<Vec<Service>>;

    /// Delete a service
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`ServiceRepository`]
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>> {
        let model = ServiceEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Service::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Service>> {
        let model = ServiceEntity::find()
            .filter(service::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(Service::from))
    }

    async fn insert(&self, service: Service) -> AppResult<Service> {
        let active = service::ActiveModel {
            id: Set(service.id),
            name: Set(service.name),
            description: Set(service.description),
            price: Set(service.price),
            duration: Set(service.duration),
            created_at: Set(service.created_at),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Service::from(model))
    }

    async fn update(&self, service: Service) -> AppResult<Service> {
        let model = ServiceEntity::find_by_id(service.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: service::ActiveModel = model.into();
        active.name = Set(service.name);
        active.description = Set(service.description);
        active.price = Set(service.price);
        active.duration = Set(service.duration);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Service::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .order_by_asc(service::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ServiceEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
