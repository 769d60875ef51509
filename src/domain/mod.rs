//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod appointment;
pub mod master;
pub mod password;
pub mod service;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, CreateAppointment, UpdateAppointment};
pub use master::{CreateMaster, Master, UpdateMaster};
pub use password::Password;
pub use service::{CreateService, Service, UpdateService};
pub use user::{User, UserResponse};
