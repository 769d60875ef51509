//! Appointment domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_PENDING, STATUS_SCHEDULED};

/// Appointment lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl From<&str> for AppointmentStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_SCHEDULED => AppointmentStatus::Scheduled,
            STATUS_COMPLETED => AppointmentStatus::Completed,
            STATUS_CANCELLED => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Pending,
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "{}", STATUS_PENDING),
            AppointmentStatus::Scheduled => write!(f, "{}", STATUS_SCHEDULED),
            AppointmentStatus::Completed => write!(f, "{}", STATUS_COMPLETED),
            AppointmentStatus::Cancelled => write!(f, "{}", STATUS_CANCELLED),
        }
    }
}

/// Appointment domain entity
///
/// An appointment books one master for one client at an exact timestamp.
/// Two appointments for the same master at the same timestamp are a
/// double-booking and must never coexist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    /// Unique appointment identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Booked slot timestamp
    pub date_time: DateTime<Utc>,
    /// Lifecycle status
    #[schema(example = "pending")]
    pub status: AppointmentStatus,
    /// Client who booked the appointment
    pub user_id: Uuid,
    /// Master performing the service
    pub master_id: Uuid,
    /// Booked service
    pub service_id: Uuid,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a new appointment in the pending state
    pub fn new(data: CreateAppointment) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_time: data.date_time,
            status: AppointmentStatus::Pending,
            user_id: data.user_id,
            master_id: data.master_id,
            service_id: data.service_id,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update, leaving omitted fields unchanged
    pub fn apply(&mut self, changes: UpdateAppointment) {
        if let Some(date_time) = changes.date_time {
            self.date_time = date_time;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(user_id) = changes.user_id {
            self.user_id = user_id;
        }
        if let Some(master_id) = changes.master_id {
            self.master_id = master_id;
        }
        if let Some(service_id) = changes.service_id {
            self.service_id = service_id;
        }
    }

    /// The (master, timestamp) pair that must be unique among appointments
    pub fn slot(&self) -> (Uuid, DateTime<Utc>) {
        (self.master_id, self.date_time)
    }
}

/// Appointment creation data transfer object
///
/// Status is not client-assignable; new appointments always start pending.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAppointment {
    /// Requested slot timestamp
    pub date_time: DateTime<Utc>,
    /// Client who books the appointment
    pub user_id: Uuid,
    /// Master to book
    pub master_id: Uuid,
    /// Service to book
    pub service_id: Uuid,
}

/// Appointment update data transfer object (all fields optional)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAppointment {
    /// New slot timestamp
    pub date_time: Option<DateTime<Utc>>,
    /// New lifecycle status
    pub status: Option<AppointmentStatus>,
    /// Reassigned client
    pub user_id: Option<Uuid>,
    /// Reassigned master
    pub master_id: Option<Uuid>,
    /// Reassigned service
    pub service_id: Option<Uuid>,
}
