//! Request routes. `user_id` is stored as given; there is no user table to check it against.

use crate::error::AppError;
use crate::extractors::{EntityId, Payload};
use crate::models::{CreateRequest, Request, UpdateRequest};
use crate::repository::RequestRepository;
use crate::response::Deleted;
use crate::state::AppState;
use axum::{extract::State, Json};

const ENTITY: &str = "Request";

#[utoipa::path(
    get,
    path = "/request/get_requests",
    tag = "request",
    operation_id = "request_list",
    responses((status = 200, description = "All requests", body = [Request]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Request>>, AppError> {
    let rows = RequestRepository::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/request/get_request_by_id/{id}",
    tag = "request",
    operation_id = "request_read",
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 200, description = "Found", body = Request),
        (status = 404, description = "No such request")
    )
)]
pub async fn read(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Request>, AppError> {
    RequestRepository::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    post,
    path = "/request/create_request",
    tag = "request",
    operation_id = "request_create",
    request_body = CreateRequest,
    responses(
        (status = 200, description = "Created request", body = Request),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload<CreateRequest>,
) -> Result<Json<Request>, AppError> {
    let row = RequestRepository::create(&state.pool, &body).await?;
    tracing::info!(id = row.id, "request created");
    Ok(Json(row))
}

#[utoipa::path(
    patch,
    path = "/request/update_request/{id}",
    tag = "request",
    operation_id = "request_update",
    params(("id" = i32, Path, description = "Request id")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Updated request", body = Request),
        (status = 404, description = "No such request"),
        (status = 422, description = "Payload failed validation")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Payload(patch): Payload<UpdateRequest>,
) -> Result<Json<Request>, AppError> {
    RequestRepository::update(&state.pool, id, patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

#[utoipa::path(
    delete,
    path = "/request/delete_request/{id}",
    tag = "request",
    operation_id = "request_delete",
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "No such request")
    )
)]
pub async fn delete(State(state): State<AppState>, EntityId(id): EntityId) -> Result<Json<Deleted>, AppError> {
    if !RequestRepository::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(id, "request deleted");
    Ok(Json(Deleted::new(ENTITY, id)))
}
