//! Service container - wires repositories and services together.

use std::sync::Arc;

use super::{
    AppointmentScheduler, AppointmentService, AuthService, Authenticator, CatalogManager,
    CatalogService, MasterManager, MasterService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Centralized access to all application services
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    master_service: Arc<dyn MasterService>,
    catalog_service: Arc<dyn CatalogService>,
    appointment_service: Arc<dyn AppointmentService>,
}

impl Services {
    /// Wire all services over a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let user_service = Arc::new(UserManager::new(uow.clone()));
        let master_service = Arc::new(MasterManager::new(uow.clone()));
        let catalog_service = Arc::new(CatalogManager::new(uow.clone()));
        let appointment_service = Arc::new(AppointmentScheduler::new(uow));

        Self {
            auth_service,
            user_service,
            master_service,
            catalog_service,
            appointment_service,
        }
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    /// Get master service
    pub fn masters(&self) -> Arc<dyn MasterService> {
        self.master_service.clone()
    }

    /// Get catalog service
    pub fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    /// Get appointment service
    pub fn appointments(&self) -> Arc<dyn AppointmentService> {
        self.appointment_service.clone()
    }
}
