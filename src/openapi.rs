//! OpenAPI document for every entity and aggregate route.

use crate::handlers::{building, campus, request, room, room_item};
use crate::models::{
    Building, BuildingTip, Campus, CreateBuilding, CreateCampus, CreateRequest, CreateRoom, CreateRoomItem, Request,
    Room, RoomItem, UpdateBuilding, UpdateCampus, UpdateRequest, UpdateRoom, UpdateRoomItem,
};
use crate::response::Deleted;
use crate::views::{BuildingDetail, CampusSummary, ItemSummary, RoomWithBuilding, RoomWithItems};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        campus::list,
        campus::read,
        campus::create,
        campus::update,
        campus::delete,
        building::list,
        building::read,
        building::detail,
        building::create,
        building::update,
        building::delete,
        room::list,
        room::read,
        room::with_building,
        room::create,
        room::update,
        room::delete,
        room_item::list,
        room_item::read,
        room_item::create,
        room_item::update,
        room_item::delete,
        request::list,
        request::read,
        request::create,
        request::update,
        request::delete
    ),
    components(schemas(
        Campus,
        CreateCampus,
        UpdateCampus,
        Building,
        BuildingTip,
        CreateBuilding,
        UpdateBuilding,
        Room,
        CreateRoom,
        UpdateRoom,
        RoomItem,
        CreateRoomItem,
        UpdateRoomItem,
        Request,
        CreateRequest,
        UpdateRequest,
        BuildingDetail,
        RoomWithItems,
        ItemSummary,
        RoomWithBuilding,
        CampusSummary,
        Deleted
    )),
    tags(
        (name = "campus", description = "Campuses"),
        (name = "building", description = "Buildings and the building detail view"),
        (name = "room", description = "Rooms and the room-with-building view"),
        (name = "room_item", description = "Items kept in rooms"),
        (name = "request", description = "Requests raised for rooms")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route_group() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/campus/get_campuses",
            "/building/get_building_detail/{id}",
            "/room/get_room_with_building/{id}",
            "/room_item/delete_room_item/{id}",
            "/request/update_request/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(paths.len(), 27);
        assert!(doc["components"]["schemas"]["BuildingTip"].is_object());
    }
}
