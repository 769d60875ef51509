//! Shared test fixtures: mock repositories and a test Unit of Work.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use salon_api::domain::{Appointment, Master, Service, User};
use salon_api::errors::AppResult;
use salon_api::infra::{
    AppointmentRepository, MasterRepository, ServiceRepository, UnitOfWork, UserRepository,
};
use salon_api::Config;

mockall::mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn insert(&self, user: User) -> AppResult<User>;
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

mockall::mock! {
    pub MasterRepo {}

    #[async_trait]
    impl MasterRepository for MasterRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Master>>;
        async fn find_by_phone(&self, phone: &str) -> AppResult<Option<Master>>;
        async fn insert(&self, master: Master) -> AppResult<Master>;
        async fn update(&self, master: Master) -> AppResult<Master>;
        async fn list(&self) -> AppResult<Vec<Master>>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

mockall::mock! {
    pub ServiceRepo {}

    #[async_trait]
    impl ServiceRepository for ServiceRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>>;
        async fn find_by_name(&self, name: &str) -> AppResult<Option<Service>>;
        async fn insert(&self, service: Service) -> AppResult<Service>;
        async fn update(&self, service: Service) -> AppResult<Service>;
        async fn list(&self) -> AppResult<Vec<Service>>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

mockall::mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;
        async fn find_by_slot(
            &self,
            master_id: Uuid,
            date_time: DateTime<Utc>,
        ) -> AppResult<Option<Appointment>>;
        async fn insert(&self, appointment: Appointment) -> AppResult<Appointment>;
        async fn update(&self, appointment: Appointment) -> AppResult<Appointment>;
        async fn list(&self) -> AppResult<Vec<Appointment>>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

/// Test Unit of Work over mock repositories.
///
/// Tests set expectations on the mocks they touch and leave the rest at
/// their defaults, where any call fails the test.
#[derive(Default)]
pub struct TestUnitOfWork {
    pub users: Arc<MockUserRepo>,
    pub masters: Arc<MockMasterRepo>,
    pub services: Arc<MockServiceRepo>,
    pub appointments: Arc<MockAppointmentRepo>,
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn masters(&self) -> Arc<dyn MasterRepository> {
        self.masters.clone()
    }

    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.services.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointments.clone()
    }
}

/// Configuration fixture with a deterministic signing secret
pub fn test_config() -> Config {
    Config::new(
        "postgres://localhost:5432/salon_test",
        "test-secret-key-for-testing-only-32chars",
        24,
        "*",
    )
}
