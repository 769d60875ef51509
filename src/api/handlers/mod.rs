//! HTTP request handlers.

pub mod appointment_handler;
pub mod master_handler;
pub mod service_handler;
pub mod user_handler;

pub use appointment_handler::appointment_routes;
pub use master_handler::master_routes;
pub use service_handler::service_routes;
pub use user_handler::{me_routes, user_routes};
