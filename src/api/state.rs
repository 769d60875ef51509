//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AppointmentService, AuthService, CatalogService, MasterService, Services, UserService,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization; `new()` exists
/// for injecting substitutes in tests.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User directory service
    pub user_service: Arc<dyn UserService>,
    /// Master roster service
    pub master_service: Arc<dyn MasterService>,
    /// Service catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Appointment scheduling service
    pub appointment_service: Arc<dyn AppointmentService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config.clone());

        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            master_service: services.masters(),
            catalog_service: services.catalog(),
            appointment_service: services.appointments(),
            database,
            config,
        }
    }

    /// Create new application state with manually injected services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        master_service: Arc<dyn MasterService>,
        catalog_service: Arc<dyn CatalogService>,
        appointment_service: Arc<dyn AppointmentService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            master_service,
            catalog_service,
            appointment_service,
            database,
            config,
        }
    }
}
