//! Master (stylist) management handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateMaster, Master, UpdateMaster};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Master CRUD routes
pub fn master_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_master).get(list_masters))
        .route(
            "/:id",
            get(get_master).put(update_master).delete(delete_master),
        )
}

/// Create a new master
#[utoipa::path(
    post,
    path = "/api/masters",
    tag = "Masters",
    request_body = CreateMaster,
    responses(
        (status = 201, description = "Master created", body = Master),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Master with this phone already exists")
    )
)]
pub async fn create_master(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMaster>,
) -> AppResult<Created<Master>> {
    let master = state.master_service.create_master(payload).await?;

    Ok(Created(master))
}

/// List all masters
#[utoipa::path(
    get,
    path = "/api/masters",
    tag = "Masters",
    responses(
        (status = 200, description = "All masters", body = Vec<Master>)
    )
)]
pub async fn list_masters(State(state): State<AppState>) -> AppResult<Json<Vec<Master>>> {
    let masters = state.master_service.list_masters().await?;

    Ok(Json(masters))
}

/// Get a master by id
#[utoipa::path(
    get,
    path = "/api/masters/{id}",
    tag = "Masters",
    params(("id" = Uuid, Path, description = "Master id")),
    responses(
        (status = 200, description = "Master found", body = Master),
        (status = 404, description = "Master not found")
    )
)]
pub async fn get_master(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Master>> {
    let master = state.master_service.get_master(id).await?;

    Ok(Json(master))
}

/// Update a master (partial)
#[utoipa::path(
    put,
    path = "/api/masters/{id}",
    tag = "Masters",
    params(("id" = Uuid, Path, description = "Master id")),
    request_body = UpdateMaster,
    responses(
        (status = 200, description = "Master updated", body = Master),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Master not found")
    )
)]
pub async fn update_master(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateMaster>,
) -> AppResult<Json<Master>> {
    let master = state.master_service.update_master(id, payload).await?;

    Ok(Json(master))
}

/// Delete a master by id
#[utoipa::path(
    delete,
    path = "/api/masters/{id}",
    tag = "Masters",
    params(("id" = Uuid, Path, description = "Master id")),
    responses(
        (status = 204, description = "Master deleted"),
        (status = 404, description = "Master not found")
    )
)]
pub async fn delete_master(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.master_service.delete_master(id).await?;

    Ok(NoContent)
}
