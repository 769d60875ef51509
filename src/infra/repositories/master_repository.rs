//! Master repository - persistence for salon stylists.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::conflict_on_unique;
use super::entities::master::{self, Entity as MasterEntity};
use crate::domain::Master;
use crate::errors::{AppError, AppResult};

const CONFLICT_ENTITY: &str = "Master with this phone";

/// Data access contract for masters
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MasterRepository: Send + Sync {
    /// Find master by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Master>>;

    /// Find master by phone number
    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Master>>;

    /// Persist a new master
    async fn insert(&self, master: Master) -> AppResult<Master>;

    /// Persist field changes to an existing master
    async fn update(&self, master: Master) -> AppResult<Master>;

    /// List all masters
    async fn list(&self) -> AppResult<Vec<Master>>;

    /// Delete a master
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`MasterRepository`]
pub struct MasterStore {
    db: DatabaseConnection,
}

impl MasterStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MasterRepository for MasterStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Master>> {
        let model = MasterEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Master::from))
    }

    async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Master>> {
        let model = MasterEntity::find()
            .filter(master::Column::Phone.eq(phone))
            .one(&self.db)
            .await?;
        Ok(model.map(Master::from))
    }

    async fn insert(&self, master: Master) -> AppResult<Master> {
        let active = master::ActiveModel {
            id: Set(master.id),
            name: Set(master.name),
            sex: Set(master.sex),
            phone: Set(master.phone),
            experience: Set(master.experience),
            specialty: Set(master.specialty),
            created_at: Set(master.created_at),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Master::from(model))
    }

    async fn update(&self, master: Master) -> AppResult<Master> {
        let model = MasterEntity::find_by_id(master.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: master::ActiveModel = model.into();
        active.name = Set(master.name);
        active.sex = Set(master.sex);
        active.phone = Set(master.phone);
        active.experience = Set(master.experience);
        active.specialty = Set(master.specialty);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Master::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Master>> {
        let models = MasterEntity::find()
            .order_by_asc(master::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Master::from).collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = MasterEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
