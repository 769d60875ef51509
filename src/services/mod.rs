//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use the Unit of Work pattern for centralized
//! repository access.

mod appointment_service;
mod auth_service;
mod catalog_service;
pub mod container;
mod master_service;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use appointment_service::{AppointmentScheduler, AppointmentService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use catalog_service::{CatalogManager, CatalogService};
pub use master_service::{MasterManager, MasterService};
pub use user_service::{UserManager, UserService};
