//! Service catalog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateService, Service, UpdateService};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Service catalog CRUD routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_service).get(list_services))
        .route(
            "/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
}

/// Add a service to the catalog
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Service with this name already exists")
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateService>,
) -> AppResult<Created<Service>> {
    let service = state.catalog_service.create_service(payload).await?;

    Ok(Created(service))
}

/// List the service catalog
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    responses(
        (status = 200, description = "All services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.catalog_service.list_services().await?;

    Ok(Json(services))
}

/// Get a service by id
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Service>> {
    let service = state.catalog_service.get_service(id).await?;

    Ok(Json(service))
}

/// Update a service (partial)
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = state.catalog_service.update_service(id, payload).await?;

    Ok(Json(service))
}

/// Remove a service from the catalog
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "Services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.catalog_service.delete_service(id).await?;

    Ok(NoContent)
}
