use crate::error::AppError;
use crate::validation::{max_length, max_length_opt, Validate, MAX_TEXT_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `rooms`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub building_id: i32,
    pub name: String,
    pub floor: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateRoom {
    pub building_id: i32,
    pub name: String,
    pub floor: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoom {
    pub building_id: Option<i32>,
    pub name: Option<String>,
    pub floor: Option<i32>,
}

impl UpdateRoom {
    pub fn merge_into(self, room: &mut Room) {
        if let Some(building_id) = self.building_id {
            room.building_id = building_id;
        }
        if let Some(name) = self.name {
            room.name = name;
        }
        if let Some(floor) = self.floor {
            room.floor = floor;
        }
    }
}

impl Validate for CreateRoom {
    fn validate(&self) -> Result<(), AppError> {
        max_length("name", &self.name, MAX_TEXT_LEN)
    }
}

impl Validate for UpdateRoom {
    fn validate(&self) -> Result<(), AppError> {
        max_length_opt("name", self.name.as_deref(), MAX_TEXT_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_moves_room_without_renaming() {
        let now = Utc::now();
        let mut room = Room {
            id: 10,
            building_id: 1,
            name: "101".into(),
            floor: 1,
            created_at: now,
            updated_at: now,
        };
        UpdateRoom {
            building_id: Some(2),
            ..Default::default()
        }
        .merge_into(&mut room);
        assert_eq!(room.building_id, 2);
        assert_eq!(room.name, "101");
        assert_eq!(room.floor, 1);
    }

    #[test]
    fn floor_must_be_an_integer() {
        assert!(serde_json::from_str::<CreateRoom>(r#"{"building_id": 1, "name": "101", "floor": "first"}"#).is_err());
    }
}
