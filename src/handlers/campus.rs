//! Campus routes: the top of the hierarchy.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{Campus, CreateCampus, UpdateCampus};
use crate::repository::CampusRepository;
use crate::response::Deleted;
use crate::state::AppState;
use axum::{extract::State, Json};

const ENTITY: &str = "Campus";

#[utoipa::path(
    get,
    path = "/campus/get_campuses",
    tag = "campus",
    operation_id = "campus_list",
    responses((status = 200, description = "All campuses", body = [Campus]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Campus>>, AppError> {
    let rows = CampusRepository::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/campus/get_campus_by_id/{id}",
    tag = "campus",
    operation_id = "campus_read",
    params(("id" = i32, Path, description = "Campus id")),
    responses(
        (status = 200, description = "Found", body = Campus),
        (status = 404, description = "No such campus")
    )
)]
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Campus>, AppError> {
    CampusRepository::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    post,
    path = "/campus/create_campus",
    tag = "campus",
    operation_id = "campus_create",
    request_body = CreateCampus,
    responses(
        (status = 200, description = "Created campus", body = Campus),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CreateCampus>,
) -> Result<Json<Campus>, AppError> {
    let row = CampusRepository::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, "campus created");
    Ok(Json(row))
}

#[utoipa::path(
    patch,
    path = "/campus/update_campus/{id}",
    tag = "campus",
    operation_id = "campus_update",
    params(("id" = i32, Path, description = "Campus id")),
    request_body = UpdateCampus,
    responses(
        (status = 200, description = "Updated campus", body = Campus),
        (status = 404, description = "No such campus"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(patch): Payload<UpdateCampus>,
) -> Result<Json<Campus>, AppError> {
    CampusRepository::update(&state.pool, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    delete,
    path = "/campus/delete_campus/{id}",
    tag = "campus",
    operation_id = "campus_delete",
    params(("id" = i32, Path, description = "Campus id")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "No such campus")
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Deleted>, AppError> {
    if !CampusRepository::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(id, "campus deleted");
    Ok(Json(Deleted::new(ENTITY, id)))
}
