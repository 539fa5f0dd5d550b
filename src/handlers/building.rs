//! Building routes, plus the nested building detail view.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{Building, CreateBuilding, UpdateBuilding};
use crate::repository::{BuildingRepository, RoomItemRepository, RoomRepository};
use crate::response::Deleted;
use crate::state::AppState;
use crate::views::{self, BuildingDetail};
use axum::{extract::State, Json};

const ENTITY: &str = "Building";

#[utoipa::path(
    get,
    path = "/building/get_buildings",
    tag = "building",
    operation_id = "building_list",
    responses((status = 200, description = "All buildings", body = [Building]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Building>>, AppError> {
    let rows = BuildingRepository::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/building/get_building_by_id/{id}",
    tag = "building",
    operation_id = "building_read",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, description = "Found", body = Building),
        (status = 404, description = "No such building")
    )
)]
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Building>, AppError> {
    BuildingRepository::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    post,
    path = "/building/create_building",
    tag = "building",
    operation_id = "building_create",
    request_body = CreateBuilding,
    responses(
        (status = 200, description = "Created building", body = Building),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CreateBuilding>,
) -> Result<Json<Building>, AppError> {
    let row = BuildingRepository::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, "building created");
    Ok(Json(row))
}

#[utoipa::path(
    patch,
    path = "/building/update_building/{id}",
    tag = "building",
    operation_id = "building_update",
    params(("id" = i32, Path, description = "Building id")),
    request_body = UpdateBuilding,
    responses(
        (status = 200, description = "Updated building", body = Building),
        (status = 404, description = "No such building"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(patch): Payload<UpdateBuilding>,
) -> Result<Json<Building>, AppError> {
    BuildingRepository::update(&state.pool, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    delete,
    path = "/building/delete_building/{id}",
    tag = "building",
    operation_id = "building_delete",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "No such building")
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Deleted>, AppError> {
    if !BuildingRepository::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(id, "building deleted");
    Ok(Json(Deleted::new(ENTITY, id)))
}

/// Building with its rooms and each room's items. Two queries after the building lookup,
/// regardless of room count.
#[utoipa::path(
    get,
    path = "/building/get_building_detail/{id}",
    tag = "building",
    operation_id = "building_detail",
    params(("id" = i32, Path, description = "Building id")),
    responses(
        (status = 200, description = "Found", body = BuildingDetail),
        (status = 404, description = "No such building")
    )
)]
pub async fn detail(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<BuildingDetail>, AppError> {
    let building = BuildingRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let rooms = RoomRepository::list_by_building(&state.pool, id).await?;
    let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
    let items = RoomItemRepository::list_by_rooms(&state.pool, &room_ids).await?;
    Ok(Json(views::building_detail(building, rooms, items)))
}
