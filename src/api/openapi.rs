//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{appointment_handler, master_handler, service_handler, user_handler};
use crate::domain::{
    Appointment, AppointmentStatus, CreateAppointment, CreateMaster, CreateService, Master,
    Service, UpdateAppointment, UpdateMaster, UpdateService, UserResponse,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Salon Natasha API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salon Natasha API",
        version = "0.1.0",
        description = "Appointment booking backend: users, masters, services, and appointments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::register,
        user_handler::login,
        user_handler::get_current_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::delete_user,
        // Master endpoints
        master_handler::create_master,
        master_handler::list_masters,
        master_handler::get_master,
        master_handler::update_master,
        master_handler::delete_master,
        // Service catalog endpoints
        service_handler::create_service,
        service_handler::list_services,
        service_handler::get_service,
        service_handler::update_service,
        service_handler::delete_service,
        // Appointment endpoints
        appointment_handler::create_appointment,
        appointment_handler::list_appointments,
        appointment_handler::get_appointment,
        appointment_handler::update_appointment,
        appointment_handler::delete_appointment,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Master,
            CreateMaster,
            UpdateMaster,
            Service,
            CreateService,
            UpdateService,
            Appointment,
            AppointmentStatus,
            CreateAppointment,
            UpdateAppointment,
            // Auth types
            user_handler::RegisterRequest,
            user_handler::LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User registration, login, and accounts"),
        (name = "Masters", description = "Master (stylist) management"),
        (name = "Services", description = "Service catalog management"),
        (name = "Appointments", description = "Appointment booking and scheduling")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/users/login"))
                        .build(),
                ),
            );
        }
    }
}
