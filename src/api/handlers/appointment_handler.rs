//! Appointment booking handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Appointment, CreateAppointment, UpdateAppointment};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Appointment CRUD routes
pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment).get(list_appointments))
        .route(
            "/:id",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Time slot is already booked for this master")
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAppointment>,
) -> AppResult<Created<Appointment>> {
    let appointment = state
        .appointment_service
        .create_appointment(payload)
        .await?;

    Ok(Created(appointment))
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "All appointments", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state.appointment_service.list_appointments().await?;

    Ok(Json(appointments))
}

/// Get an appointment by id
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment found", body = Appointment),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.appointment_service.get_appointment(id).await?;

    Ok(Json(appointment))
}

/// Update an appointment (partial, including status and rescheduling)
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    request_body = UpdateAppointment,
    responses(
        (status = 200, description = "Appointment updated", body = Appointment),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Appointment not found"),
        (status = 409, description = "Target time slot is already booked")
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAppointment>,
) -> AppResult<Json<Appointment>> {
    let appointment = state
        .appointment_service
        .update_appointment(id, payload)
        .await?;

    Ok(Json(appointment))
}

/// Cancel an appointment by deleting it
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.appointment_service.delete_appointment(id).await?;

    Ok(NoContent)
}
