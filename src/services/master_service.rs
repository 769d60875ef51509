//! Master service - manages the salon's stylist roster.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateMaster, Master, UpdateMaster};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Master service trait for dependency injection.
#[async_trait]
pub trait MasterService: Send + Sync {
    /// Create a new master; phone number must be unused
    async fn create_master(&self, data: CreateMaster) -> AppResult<Master>;

    /// List all masters
    async fn list_masters(&self) -> AppResult<Vec<Master>>;

    /// Get master by ID
    async fn get_master(&self, id: Uuid) -> AppResult<Master>;

    /// Apply a partial update to a master
    async fn update_master(&self, id: Uuid, changes: UpdateMaster) -> AppResult<Master>;

    /// Delete a master
    async fn delete_master(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of MasterService using Unit of Work.
pub struct MasterManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MasterManager<U> {
    /// Create new master service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MasterService for MasterManager<U> {
    async fn create_master(&self, data: CreateMaster) -> AppResult<Master> {
        if self.uow.masters().find_by_phone(&data.phone).await?.is_some() {
            return Err(AppError::conflict("Master with this phone"));
        }

        let master = Master::new(data);
        self.uow.masters().insert(master).await
    }

    async fn list_masters(&self) -> AppResult<Vec<Master>> {
        self.uow.masters().list().await
    }

    async fn get_master(&self, id: Uuid) -> AppResult<Master> {
        self.uow.masters().find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_master(&self, id: Uuid, changes: UpdateMaster) -> AppResult<Master> {
        let mut master = self.uow.masters().find_by_id(id).await?.ok_or_not_found()?;
        master.apply(changes);
        self.uow.masters().update(master).await
    }

    async fn delete_master(&self, id: Uuid) -> AppResult<()> {
        self.uow.masters().delete(id).await
    }
}
