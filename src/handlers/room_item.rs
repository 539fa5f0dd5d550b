use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{CreateRoomItem, RoomItem, UpdateRoomItem};
use crate::repository::RoomItemRepository;
use crate::response::Deleted;
use crate::state::AppState;
use axum::{extract::State, Json};

const ENTITY: &str = "RoomItem";

#[utoipa::path(
    get,
    path = "/room_item/get_room_items",
    tag = "room_item",
    operation_id = "room_item_list",
    responses((status = 200, description = "All room items", body = [RoomItem]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RoomItem>>, AppError> {
    let rows = RoomItemRepository::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/room_item/get_room_item_by_id/{id}",
    tag = "room_item",
    operation_id = "room_item_read",
    params(("id" = i32, Path, description = "RoomItem id")),
    responses(
        (status = 200, description = "Found", body = RoomItem),
        (status = 404, description = "No such room item")
    )
)]
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<RoomItem>, AppError> {
    RoomItemRepository::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    post,
    path = "/room_item/create_room_item",
    tag = "room_item",
    operation_id = "room_item_create",
    request_body = CreateRoomItem,
    responses(
        (status = 200, description = "Created room item; a request_id of 0 is stored as null", body = RoomItem),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CreateRoomItem>,
) -> Result<Json<RoomItem>, AppError> {
    let row = RoomItemRepository::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, request_id = ?row.request_id, "room item created");
    Ok(Json(row))
}

#[utoipa::path(
    patch,
    path = "/room_item/update_room_item/{id}",
    tag = "room_item",
    operation_id = "room_item_update",
    params(("id" = i32, Path, description = "RoomItem id")),
    request_body = UpdateRoomItem,
    responses(
        (status = 200, description = "Updated room item", body = RoomItem),
        (status = 404, description = "No such room item"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(patch): Payload<UpdateRoomItem>,
) -> Result<Json<RoomItem>, AppError> {
    RoomItemRepository::update(&state.pool, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    delete,
    path = "/room_item/delete_room_item/{id}",
    tag = "room_item",
    operation_id = "room_item_delete",
    params(("id" = i32, Path, description = "RoomItem id")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "No such room item")
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Deleted>, AppError> {
    if !RoomItemRepository::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(id, "room item deleted");
    Ok(Json(Deleted::new(ENTITY, id)))
}
