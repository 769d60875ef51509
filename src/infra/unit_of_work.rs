//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories behind a single injection
//! point, keeping services decoupled from concrete stores. Uniqueness
//! invariants are enforced by database indexes rather than explicit
//! transactions, so no transaction management lives here.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::db::clone_connection;
use super::repositories::{
    AppointmentRepository, AppointmentStore, MasterRepository, MasterStore, ServiceRepository,
    ServiceStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get master repository
    fn masters(&self) -> Arc<dyn MasterRepository>;

    /// Get service catalog repository
    fn services(&self) -> Arc<dyn ServiceRepository>;

    /// Get appointment repository
    fn appointments(&self) -> Arc<dyn AppointmentRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores
pub struct Persistence {
    user_repo: Arc<UserStore>,
    master_repo: Arc<MasterStore>,
    service_repo: Arc<ServiceStore>,
    appointment_repo: Arc<AppointmentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(clone_connection(&db))),
            master_repo: Arc::new(MasterStore::new(clone_connection(&db))),
            service_repo: Arc::new(ServiceStore::new(clone_connection(&db))),
            appointment_repo: Arc::new(AppointmentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn masters(&self) -> Arc<dyn MasterRepository> {
        self.master_repo.clone()
    }

    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.service_repo.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_repo.clone()
    }
}
