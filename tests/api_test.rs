//! Integration tests for API endpoints.
//!
//! These tests drive the real router through mock services, so no
//! database connection is required.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use salon_api::api::create_router;
use salon_api::domain::{
    Appointment, CreateAppointment, CreateMaster, CreateService, Master, Service,
    UpdateAppointment, UpdateMaster, UpdateService, User,
};
use salon_api::errors::{AppError, AppResult};
use salon_api::infra::Database;
use salon_api::services::{
    AppointmentService, AuthService, CatalogService, Claims, MasterService, TokenResponse,
    UserService,
};
use salon_api::AppState;

use common::test_config;

/// Identity carried by the well-known test token
const KNOWN_USER: Uuid = Uuid::from_u128(0xA11CE);

/// Id that every mock service treats as nonexistent
const MISSING: Uuid = Uuid::nil();

const TAKEN_PHONE: &str = "+1-555-0100";
const TAKEN_SERVICE_NAME: &str = "Manicure";
const TAKEN_SLOT: &str = "2025-06-01T10:00:00Z";

// =============================================================================
// Mock Services for Testing
// =============================================================================

fn known_user(id: Uuid) -> User {
    User {
        id,
        email: "anna@example.com".to_string(),
        password_hash: "hashed".to_string(),
        name: Some("Anna".to_string()),
        created_at: Utc::now(),
    }
}

fn base_master() -> CreateMaster {
    CreateMaster {
        name: "Natasha Ivanova".to_string(),
        sex: "female".to_string(),
        phone: "+1-555-0199".to_string(),
        experience: 7,
        specialty: "coloring".to_string(),
    }
}

fn base_service() -> CreateService {
    CreateService {
        name: "Haircut".to_string(),
        description: "Wash, cut and style".to_string(),
        price: 35.0,
        duration: 45,
    }
}

fn base_appointment() -> CreateAppointment {
    CreateAppointment {
        date_time: "2025-06-01T12:00:00Z".parse().unwrap(),
        user_id: Uuid::new_v4(),
        master_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
    }
}

/// Mock auth service that recognizes one account and one bearer token
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        email: String,
        _password: String,
        name: Option<String>,
    ) -> AppResult<User> {
        if email == "taken@example.com" {
            return Err(AppError::conflict("User"));
        }
        Ok(User {
            id: Uuid::new_v4(),
            email,
            password_hash: "hashed".to_string(),
            name,
            created_at: Utc::now(),
        })
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        if email == "anna@example.com" && password == "supersecret" {
            Ok(TokenResponse {
                access_token: "mock-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 86400,
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == "valid-test-token" {
            Ok(Claims {
                sub: "anna@example.com".to_string(),
                user_id: KNOWN_USER,
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Mock user service backed by a single known user
struct MockUserService;

#[async_trait]
impl UserService for MockUserService {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        Ok(known_user(id))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![known_user(Uuid::new_v4()), known_user(Uuid::new_v4())])
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Mock master service with one reserved phone number
struct MockMasterService;

#[async_trait]
impl MasterService for MockMasterService {
    async fn create_master(&self, data: CreateMaster) -> AppResult<Master> {
        if data.phone == TAKEN_PHONE {
            return Err(AppError::conflict("Master with this phone"));
        }
        Ok(Master::new(data))
    }

    async fn list_masters(&self) -> AppResult<Vec<Master>> {
        Ok(vec![Master::new(base_master()), Master::new(base_master())])
    }

    async fn get_master(&self, id: Uuid) -> AppResult<Master> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut master = Master::new(base_master());
        master.id = id;
        Ok(master)
    }

    async fn update_master(&self, id: Uuid, changes: UpdateMaster) -> AppResult<Master> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut master = Master::new(base_master());
        master.id = id;
        master.apply(changes);
        Ok(master)
    }

    async fn delete_master(&self, id: Uuid) -> AppResult<()> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Mock catalog service with one reserved service name
struct MockCatalogService;

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn create_service(&self, data: CreateService) -> AppResult<Service> {
        if data.name == TAKEN_SERVICE_NAME {
            return Err(AppError::conflict("Service with this name"));
        }
        Ok(Service::new(data))
    }

    async fn list_services(&self) -> AppResult<Vec<Service>> {
        Ok(vec![Service::new(base_service())])
    }

    async fn get_service(&self, id: Uuid) -> AppResult<Service> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut service = Service::new(base_service());
        service.id = id;
        Ok(service)
    }

    async fn update_service(&self, id: Uuid, changes: UpdateService) -> AppResult<Service> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut service = Service::new(base_service());
        service.id = id;
        service.apply(changes);
        Ok(service)
    }

    async fn delete_service(&self, id: Uuid) -> AppResult<()> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Mock appointment service with one occupied slot
struct MockAppointmentService;

#[async_trait]
impl AppointmentService for MockAppointmentService {
    async fn create_appointment(&self, data: CreateAppointment) -> AppResult<Appointment> {
        let taken: DateTime<Utc> = TAKEN_SLOT.parse().unwrap();
        if data.date_time == taken {
            return Err(AppError::conflict("Appointment for this time slot"));
        }
        Ok(Appointment::new(data))
    }

    async fn list_appointments(&self) -> AppResult<Vec<Appointment>> {
        Ok(vec![Appointment::new(base_appointment())])
    }

    async fn get_appointment(&self, id: Uuid) -> AppResult<Appointment> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut appointment = Appointment::new(base_appointment());
        appointment.id = id;
        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: Uuid,
        changes: UpdateAppointment,
    ) -> AppResult<Appointment> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        let mut appointment = Appointment::new(base_appointment());
        appointment.id = id;
        appointment.apply(changes);
        Ok(appointment)
    }

    async fn delete_appointment(&self, id: Uuid) -> AppResult<()> {
        if id == MISSING {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

/// Build a router over mock services and an unprimed mock database
fn app() -> Router {
    app_with_connection(
        sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection(),
    )
}

fn app_with_connection(connection: sea_orm::DatabaseConnection) -> Router {
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockUserService),
        Arc::new(MockMasterService),
        Arc::new(MockCatalogService),
        Arc::new(MockAppointmentService),
        Arc::new(Database::from_connection(connection)),
        test_config(),
    );
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, token.to_string())
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Root and health
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let response = app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Welcome to Salon Natasha API");
}

#[tokio::test]
async fn test_health_reports_healthy_database() {
    let connection = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
        .append_exec_results([sea_orm::MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let response = app_with_connection(connection)
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_reports_degraded_database() {
    // The unprimed mock connection fails the ping
    let response = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = app().oneshot(get("/api/unknown")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Registration and login
// =============================================================================

#[tokio::test]
async fn test_register_returns_created_user_without_password_hash() {
    let payload = json!({
        "email": "new@example.com",
        "password": "supersecret",
        "name": "New User"
    });

    let response = app().oneshot(post_json("/api/users", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["name"], "New User");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_without_name_is_accepted() {
    let payload = json!({
        "email": "new@example.com",
        "password": "supersecret"
    });

    let response = app().oneshot(post_json("/api/users", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], Value::Null);
}

#[tokio::test]
async fn test_register_invalid_email_rejected() {
    let payload = json!({
        "email": "not-an-email",
        "password": "supersecret"
    });

    let response = app().oneshot(post_json("/api/users", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid email format");
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let payload = json!({
        "email": "new@example.com",
        "password": "short"
    });

    let response = app().oneshot(post_json("/api/users", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let payload = json!({
        "email": "taken@example.com",
        "password": "supersecret"
    });

    let response = app().oneshot(post_json("/api/users", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "User already exists");
}

#[tokio::test]
async fn test_login_returns_token() {
    let payload = json!({
        "email": "anna@example.com",
        "password": "supersecret"
    });

    let response = app()
        .oneshot(post_json("/api/users/login", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["access_token"], "mock-token");
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 86400);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let payload = json!({
        "email": "anna@example.com",
        "password": "wrong-password"
    });

    let response = app()
        .oneshot(post_json("/api/users/login", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

// =============================================================================
// Current user endpoint
// =============================================================================

#[tokio::test]
async fn test_me_without_token_unauthorized() {
    let response = app().oneshot(get("/api/users/me")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_with_wrong_scheme_unauthorized() {
    let response = app()
        .oneshot(get_with_token("/api/users/me", "Basic dXNlcjpwYXNz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_invalid_token_unauthorized() {
    let response = app()
        .oneshot(get_with_token("/api/users/me", "Bearer expired-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_valid_token_returns_user() {
    let response = app()
        .oneshot(get_with_token("/api/users/me", "Bearer valid-test-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], KNOWN_USER.to_string());
    assert_eq!(body["email"], "anna@example.com");
}

// =============================================================================
// User directory
// =============================================================================

#[tokio::test]
async fn test_list_users_hides_password_hashes() {
    let response = app().oneshot(get("/api/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let response = app()
        .oneshot(get(&format!("/api/users/{}", MISSING)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_user_returns_no_content() {
    let response = app()
        .oneshot(delete(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

// =============================================================================
// Masters
// =============================================================================

#[tokio::test]
async fn test_create_master_returns_201() {
    let payload = json!({
        "name": "Natasha Ivanova",
        "sex": "female",
        "phone": "+1-555-0142",
        "experience": 7,
        "specialty": "coloring"
    });

    let response = app().oneshot(post_json("/api/masters", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Natasha Ivanova");
    assert_eq!(body["phone"], "+1-555-0142");
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn test_create_master_without_experience_defaults_to_zero() {
    let payload = json!({
        "name": "Natasha Ivanova",
        "sex": "female",
        "phone": "+1-555-0142",
        "specialty": "coloring"
    });

    let response = app().oneshot(post_json("/api/masters", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["experience"], 0);
}

#[tokio::test]
async fn test_create_master_duplicate_phone_conflicts() {
    let payload = json!({
        "name": "Another Master",
        "sex": "female",
        "phone": TAKEN_PHONE,
        "experience": 2,
        "specialty": "styling"
    });

    let response = app().oneshot(post_json("/api/masters", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Master with this phone already exists"
    );
}

#[tokio::test]
async fn test_create_master_empty_name_rejected() {
    let payload = json!({
        "name": "",
        "sex": "female",
        "phone": "+1-555-0142",
        "specialty": "coloring"
    });

    let response = app().oneshot(post_json("/api/masters", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_master_applies_partial_changes() {
    let master_id = Uuid::new_v4();
    let payload = json!({ "experience": 9 });

    let response = app()
        .oneshot(put_json(&format!("/api/masters/{}", master_id), &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["experience"], 9);
    assert_eq!(body["name"], "Natasha Ivanova");
}

#[tokio::test]
async fn test_invalid_uuid_in_path_rejected() {
    let response = app().oneshot(get("/api/masters/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Service catalog
// =============================================================================

#[tokio::test]
async fn test_create_service_returns_201() {
    let payload = json!({
        "name": "Haircut",
        "description": "Wash, cut and style",
        "price": 35.0,
        "duration": 45
    });

    let response = app().oneshot(post_json("/api/services", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Haircut");
    assert_eq!(body["price"], 35.0);
}

#[tokio::test]
async fn test_create_service_duplicate_name_conflicts() {
    let payload = json!({
        "name": TAKEN_SERVICE_NAME,
        "description": "Nails",
        "price": 25.0,
        "duration": 30
    });

    let response = app().oneshot(post_json("/api/services", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Service with this name already exists"
    );
}

#[tokio::test]
async fn test_update_service_price_only_keeps_other_fields() {
    let service_id = Uuid::new_v4();
    let payload = json!({ "price": 55.0 });

    let response = app()
        .oneshot(put_json(&format!("/api/services/{}", service_id), &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["price"], 55.0);
    assert_eq!(body["name"], "Haircut");
    assert_eq!(body["duration"], 45);
}

#[tokio::test]
async fn test_create_service_negative_price_rejected() {
    let payload = json!({
        "name": "Haircut",
        "description": "Wash, cut and style",
        "price": -5.0,
        "duration": 45
    });

    let response = app().oneshot(post_json("/api/services", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Appointments
// =============================================================================

#[tokio::test]
async fn test_create_appointment_starts_pending() {
    let payload = json!({
        "date_time": "2025-06-01T12:00:00Z",
        "user_id": Uuid::new_v4(),
        "master_id": Uuid::new_v4(),
        "service_id": Uuid::new_v4()
    });

    let response = app()
        .oneshot(post_json("/api/appointments", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_create_appointment_taken_slot_conflicts() {
    let payload = json!({
        "date_time": TAKEN_SLOT,
        "user_id": Uuid::new_v4(),
        "master_id": Uuid::new_v4(),
        "service_id": Uuid::new_v4()
    });

    let response = app()
        .oneshot(post_json("/api/appointments", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Appointment for this time slot already exists"
    );
}

#[tokio::test]
async fn test_update_appointment_status() {
    let appointment_id = Uuid::new_v4();
    let payload = json!({ "status": "completed" });

    let response = app()
        .oneshot(put_json(
            &format!("/api/appointments/{}", appointment_id),
            &payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "completed");
}

#[tokio::test]
async fn test_delete_unknown_appointment_returns_404() {
    let response = app()
        .oneshot(delete(&format!("/api/appointments/{}", MISSING)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
