//! Read-only nested shapes assembled from already-fetched rows.

use crate::models::{Building, BuildingTip, Campus, Room, RoomItem};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Item as shown inside a building detail: no request or room linkage.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ItemSummary {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub quantity: i32,
    pub status: bool,
}

impl From<RoomItem> for ItemSummary {
    fn from(item: RoomItem) -> Self {
        ItemSummary {
            id: item.id,
            name: item.name,
            date: item.date,
            quantity: item.quantity,
            status: item.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RoomWithItems {
    pub id: i32,
    pub name: String,
    pub floor: i32,
    pub items: Vec<ItemSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct BuildingDetail {
    pub id: i32,
    pub tip: Option<BuildingTip>,
    pub floors: i32,
    pub room_count: usize,
    pub rooms: Vec<RoomWithItems>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CampusSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<Campus> for CampusSummary {
    fn from(campus: Campus) -> Self {
        CampusSummary {
            id: campus.id,
            name: campus.name,
            address: campus.address,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RoomWithBuilding {
    pub room: Room,
    pub items: Vec<RoomItem>,
    pub building: Building,
    pub campus: CampusSummary,
}

/// Nest `items` under their rooms. Room order is kept; items whose room is not in `rooms` are dropped.
pub fn building_detail(building: Building, rooms: Vec<Room>, items: Vec<RoomItem>) -> BuildingDetail {
    let mut by_room: HashMap<i32, Vec<ItemSummary>> = HashMap::new();
    for item in items {
        by_room.entry(item.room_id).or_default().push(item.into());
    }
    let rooms: Vec<RoomWithItems> = rooms
        .into_iter()
        .map(|room| RoomWithItems {
            items: by_room.remove(&room.id).unwrap_or_default(),
            id: room.id,
            name: room.name,
            floor: room.floor,
        })
        .collect();
    BuildingDetail {
        id: building.id,
        tip: building.tip,
        floors: building.floors,
        room_count: rooms.len(),
        rooms,
    }
}

pub fn room_with_building(room: Room, items: Vec<RoomItem>, building: Building, campus: Campus) -> RoomWithBuilding {
    RoomWithBuilding {
        room,
        items,
        building,
        campus: campus.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn building() -> Building {
        let now = Utc::now();
        Building {
            id: 1,
            campus_id: 1,
            tip: Some(BuildingTip::Lab),
            floors: 3,
            created_at: now,
            updated_at: now,
        }
    }

    fn room(id: i32, name: &str) -> Room {
        let now = Utc::now();
        Room {
            id,
            building_id: 1,
            name: name.into(),
            floor: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn item(id: i32, room_id: i32) -> RoomItem {
        let now = Utc::now();
        RoomItem {
            id,
            request_id: Some(9),
            room_id,
            name: format!("item-{}", id),
            quantity: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn room_without_items_gets_empty_list() {
        let detail = building_detail(building(), vec![room(10, "101"), room(11, "102")], vec![item(100, 10)]);
        assert_eq!(detail.room_count, 2);
        assert_eq!(detail.rooms.len(), 2);
        assert_eq!(detail.rooms[0].items.len(), 1);
        assert_eq!(detail.rooms[0].items[0].id, 100);
        assert!(detail.rooms[1].items.is_empty());

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["tip"], "Labaratoriya");
        assert_eq!(json["rooms"][1]["items"], serde_json::json!([]));
        // request linkage is not part of the detail view
        assert!(json["rooms"][0]["items"][0].get("request_id").is_none());
        assert!(json["rooms"][0]["items"][0].get("room_id").is_none());
    }

    #[test]
    fn building_without_rooms() {
        let detail = building_detail(building(), Vec::new(), Vec::new());
        assert_eq!(detail.room_count, 0);
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["rooms"], serde_json::json!([]));
    }

    #[test]
    fn items_keep_their_order_within_a_room() {
        let detail = building_detail(
            building(),
            vec![room(10, "101"), room(11, "102")],
            vec![item(1, 11), item(2, 10), item(3, 11)],
        );
        let ids: Vec<i32> = detail.rooms[1].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(detail.rooms[0].items[0].id, 2);
    }

    #[test]
    fn room_view_nests_building_and_campus_summary() {
        let now = Utc::now();
        let campus = Campus {
            id: 1,
            name: "Main".into(),
            address: "1 University Rd".into(),
            created_at: now,
            updated_at: now,
        };
        let view = room_with_building(room(10, "101"), Vec::new(), building(), campus);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["room"]["name"], "101");
        assert_eq!(json["building"]["id"], 1);
        assert_eq!(
            json["campus"],
            serde_json::json!({"id": 1, "name": "Main", "address": "1 University Rd"})
        );
    }
}
