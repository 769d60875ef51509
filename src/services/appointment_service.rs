//! Appointment service - books and reschedules salon appointments.
//!
//! Double-booking protection is two-layered: a slot lookup before any
//! write, and the composite unique index on (master_id, date_time)
//! catching whatever races past the lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Appointment, CreateAppointment, UpdateAppointment};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

const SLOT_CONFLICT: &str = "Appointment for this time slot";

/// Appointment service trait for dependency injection.
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Book an appointment; the master's slot must be free
    async fn create_appointment(&self, data: CreateAppointment) -> AppResult<Appointment>;

    /// List all appointments
    async fn list_appointments(&self) -> AppResult<Vec<Appointment>>;

    /// Get appointment by ID
    async fn get_appointment(&self, id: Uuid) -> AppResult<Appointment>;

    /// Apply a partial update, re-checking the slot when it moves
    async fn update_appointment(
        &self,
        id: Uuid,
        changes: UpdateAppointment,
    ) -> AppResult<Appointment>;

    /// Cancel and remove an appointment
    async fn delete_appointment(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AppointmentService using Unit of Work.
pub struct AppointmentScheduler<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AppointmentScheduler<U> {
    /// Create new appointment service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn slot_taken(&self, master_id: Uuid, date_time: DateTime<Utc>) -> AppResult<bool> {
        Ok(self
            .uow
            .appointments()
            .find_by_slot(master_id, date_time)
            .await?
            .is_some())
    }
}

#[async_trait]
impl<U: UnitOfWork> AppointmentService for AppointmentScheduler<U> {
    async fn create_appointment(&self, data: CreateAppointment) -> AppResult<Appointment> {
        if self.slot_taken(data.master_id, data.date_time).await? {
            return Err(AppError::conflict(SLOT_CONFLICT));
        }

        let appointment = Appointment::new(data);
        self.uow.appointments().insert(appointment).await
    }

    async fn list_appointments(&self) -> AppResult<Vec<Appointment>> {
        self.uow.appointments().list().await
    }

    async fn get_appointment(&self, id: Uuid) -> AppResult<Appointment> {
        self.uow
            .appointments()
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn update_appointment(
        &self,
        id: Uuid,
        changes: UpdateAppointment,
    ) -> AppResult<Appointment> {
        let mut appointment = self
            .uow
            .appointments()
            .find_by_id(id)
            .await?
            .ok_or_not_found()?;

        let previous_slot = appointment.slot();
        appointment.apply(changes);

        // Only a moved slot needs re-checking; the current slot is
        // occupied by this very appointment.
        if appointment.slot() != previous_slot {
            let (master_id, date_time) = appointment.slot();
            if self.slot_taken(master_id, date_time).await? {
                return Err(AppError::conflict(SLOT_CONFLICT));
            }
        }

        self.uow.appointments().update(appointment).await
    }

    async fn delete_appointment(&self, id: Uuid) -> AppResult<()> {
        self.uow.appointments().delete(id).await
    }
}
