use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{CreateRoom, Room, UpdateRoom};
use crate::repository::{BuildingRepository, CampusRepository, RoomItemRepository, RoomRepository};
use crate::response::Deleted;
use crate::state::AppState;
use crate::views::{self, RoomWithBuilding};
use axum::{extract::State, Json};

const ENTITY: &str = "Room";

#[utoipa::path(
    get,
    path = "/room/get_rooms",
    tag = "room",
    operation_id = "room_list",
    responses((status = 200, description = "All rooms", body = [Room]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let rows = RoomRepository::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/room/get_room_by_id/{id}",
    tag = "room",
    operation_id = "room_read",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "Found", body = Room),
        (status = 404, description = "No such room")
    )
)]
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Room>, AppError> {
    RoomRepository::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    post,
    path = "/room/create_room",
    tag = "room",
    operation_id = "room_create",
    request_body = CreateRoom,
    responses(
        (status = 200, description = "Created room", body = Room),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CreateRoom>,
) -> Result<Json<Room>, AppError> {
    let row = RoomRepository::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, "room created");
    Ok(Json(row))
}

#[utoipa::path(
    patch,
    path = "/room/update_room/{id}",
    tag = "room",
    operation_id = "room_update",
    params(("id" = i32, Path, description = "Room id")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Updated room", body = Room),
        (status = 404, description = "No such room"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(patch): Payload<UpdateRoom>,
) -> Result<Json<Room>, AppError> {
    RoomRepository::update(&state.pool, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    delete,
    path = "/room/delete_room/{id}",
    tag = "room",
    operation_id = "room_delete",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "No such room")
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Deleted>, AppError> {
    if !RoomRepository::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(id, "room deleted");
    Ok(Json(Deleted::new(ENTITY, id)))
}

#[utoipa::path(
    get,
    path = "/room/get_room_with_building/{id}",
    tag = "room",
    operation_id = "room_with_building",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "Found", body = RoomWithBuilding),
        (status = 404, description = "No such room, or its building/campus is gone")
    )
)]
pub async fn with_building(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<RoomWithBuilding>, AppError> {
    let room = RoomRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;
    let items = RoomItemRepository::list_by_room(&state.pool, room.id).await?;
    let building = BuildingRepository::find_by_id(&state.pool, room.building_id)
        .await?
        .ok_or_else(|| AppError::not_found("Building", room.building_id))?;
    let campus = CampusRepository::find_by_id(&state.pool, building.campus_id)
        .await?
        .ok_or_else(|| AppError::not_found("Campus", building.campus_id))?;
    Ok(Json(views::room_with_building(room, items, building, campus)))
}
