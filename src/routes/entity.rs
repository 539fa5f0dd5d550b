//! Entity CRUD routes. Every group lives under its own prefix with verb-named paths
//! (`/campus/get_campuses`, `/campus/update_campus/:id`, ...).

use crate::handlers::{building, campus, request, room, room_item};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .nest("/campus", campus_routes())
        .nest("/building", building_routes())
        .nest("/room", room_routes())
        .nest("/room_item", room_item_routes())
        .nest("/request", request_routes())
        .with_state(state)
}

fn campus_routes() -> Router<AppState> {
    Router::new()
        .route("/get_campuses", get(campus::list))
        .route("/get_campus_by_id/:id", get(campus::read))
        .route("/create_campus", post(campus::create))
        .route("/update_campus/:id", patch(campus::update))
        .route("/delete_campus/:id", delete(campus::delete))
}

fn building_routes() -> Router<AppState> {
    Router::new()
        .route("/get_buildings", get(building::list))
        .route("/get_building_by_id/:id", get(building::read))
        .route("/get_building_detail/:id", get(building::detail))
        .route("/create_building", post(building::create))
        .route("/update_building/:id", patch(building::update))
        .route("/delete_building/:id", delete(building::delete))
}

fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/get_rooms", get(room::list))
        .route("/get_room_by_id/:id", get(room::read))
        .route("/get_room_with_building/:id", get(room::with_building))
        .route("/create_room", post(room::create))
        .route("/update_room/:id", patch(room::update))
        .route("/delete_room/:id", delete(room::delete))
}

fn room_item_routes() -> Router<AppState> {
    Router::new()
        .route("/get_room_items", get(room_item::list))
        .route("/get_room_item_by_id/:id", get(room_item::read))
        .route("/create_room_item", post(room_item::create))
        .route("/update_room_item/:id", patch(room_item::update))
        .route("/delete_room_item/:id", delete(room_item::delete))
}

fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/get_requests", get(request::list))
        .route("/get_request_by_id/:id", get(request::read))
        .route("/create_request", post(request::create))
        .route("/update_request/:id", patch(request::update))
        .route("/delete_request/:id", delete(request::delete))
}
