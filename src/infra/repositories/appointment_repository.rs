//! Appointment repository - persistence for booked slots.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::conflict_on_unique;
use super::entities::appointment::{self, Entity as AppointmentEntity};
use crate::domain::Appointment;
use crate::errors::{AppError, AppResult};

const CONFLICT_ENTITY: &str = "Appointment for this time slot";

/// Data access contract for appointments
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;

    /// Find the appointment occupying a master's slot, if any
    async fn find_by_slot(
        &self,
        master_id: Uuid,
        date_time: DateTime<Utc>,
    ) -> AppResult<Option<Appointment>>;

    /// Persist a new appointment
    async fn insert(&self, appointment: Appointment) -> AppResult<Appointment>;

    /// Persist field changes to an existing appointment
    async fn update(&self, appointment: Appointment) -> AppResult<Appointment>;

    /// List all appointments
    async fn list(&self) -> AppResult<Vec<Appointment>>;

    /// Delete an appointment
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`AppointmentRepository`]
pub struct AppointmentStore {
    db: DatabaseConnection,
}

impl AppointmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let model = AppointmentEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Appointment::from))
    }

    async fn find_by_slot(
        &self,
        master_id: Uuid,
        date_time: DateTime<Utc>,
    ) -> AppResult<Option<Appointment>> {
        let model = AppointmentEntity::find()
            .filter(appointment::Column::MasterId.eq(master_id))
            .filter(appointment::Column::DateTime.eq(date_time))
            .one(&self.db)
            .await?;
        Ok(model.map(Appointment::from))
    }

    async fn insert(&self, appointment: Appointment) -> AppResult<Appointment> {
        let active = appointment::ActiveModel {
            id: Set(appointment.id),
            date_time: Set(appointment.date_time),
            status: Set(appointment.status.to_string()),
            user_id: Set(appointment.user_id),
            master_id: Set(appointment.master_id),
            service_id: Set(appointment.service_id),
            created_at: Set(appointment.created_at),
        };

        // The composite unique index on (master_id, date_time) is the
        // final word on double-booking.
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Appointment::from(model))
    }

    async fn update(&self, appointment: Appointment) -> AppResult<Appointment> {
        let model = AppointmentEntity::find_by_id(appointment.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: appointment::ActiveModel = model.into();
        active.date_time = Set(appointment.date_time);
        active.status = Set(appointment.status.to_string());
        active.user_id = Set(appointment.user_id);
        active.master_id = Set(appointment.master_id);
        active.service_id = Set(appointment.service_id);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| conflict_on_unique(e, CONFLICT_ENTITY))?;
        Ok(Appointment::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Appointment>> {
        let models = AppointmentEntity::find()
            .order_by_asc(appointment::Column::DateTime)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Appointment::from).collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AppointmentEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
