use crate::error::AppError;
use crate::models::double_option;
use crate::validation::{max_length, max_length_opt, Validate, MAX_TEXT_LEN};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `room_items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoomItem {
    pub id: i32,
    pub request_id: Option<i32>,
    pub room_id: i32,
    pub name: String,
    pub quantity: i32,
    pub date: NaiveDate,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. `request_id` of 0 means "no request"; older clients send the date as `data`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateRoomItem {
    #[serde(default)]
    pub request_id: Option<i32>,
    pub room_id: i32,
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(alias = "data")]
    pub date: NaiveDate,
    #[serde(default)]
    pub status: bool,
}

impl CreateRoomItem {
    /// The request id to store: 0 and absent both become NULL.
    pub fn normalized_request_id(&self) -> Option<i32> {
        self.request_id.filter(|&id| id != 0)
    }
}

/// Partial update. An explicit `"request_id": null` detaches the item from its request.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRoomItem {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub request_id: Option<Option<i32>>,
    pub room_id: Option<i32>,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    #[serde(alias = "data")]
    pub date: Option<NaiveDate>,
    pub status: Option<bool>,
}

impl UpdateRoomItem {
    pub fn merge_into(self, item: &mut RoomItem) {
        if let Some(request_id) = self.request_id {
            item.request_id = request_id;
        }
        if let Some(room_id) = self.room_id {
            item.room_id = room_id;
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(date) = self.date {
            item.date = date;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}

impl Validate for CreateRoomItem {
    fn validate(&self) -> Result<(), AppError> {
        max_length("name", &self.name, MAX_TEXT_LEN)
    }
}

impl Validate for UpdateRoomItem {
    fn validate(&self) -> Result<(), AppError> {
        max_length_opt("name", self.name.as_deref(), MAX_TEXT_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> RoomItem {
        let now = Utc::now();
        RoomItem {
            id: 1,
            request_id: Some(5),
            room_id: 10,
            name: "Chair".into(),
            quantity: 4,
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            status: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn zero_request_id_becomes_null() {
        let payload: CreateRoomItem = serde_json::from_str(
            r#"{"request_id": 0, "room_id": 10, "name": "Desk", "quantity": 2, "date": "2024-09-01", "status": true}"#,
        )
        .unwrap();
        assert_eq!(payload.normalized_request_id(), None);

        let payload: CreateRoomItem = serde_json::from_str(
            r#"{"request_id": 5, "room_id": 10, "name": "Desk", "quantity": 2, "date": "2024-09-01", "status": true}"#,
        )
        .unwrap();
        assert_eq!(payload.normalized_request_id(), Some(5));
    }

    #[test]
    fn defaults_and_legacy_date_key() {
        let payload: CreateRoomItem =
            serde_json::from_str(r#"{"room_id": 10, "name": "Lamp", "data": "2024-02-29"}"#).unwrap();
        assert_eq!(payload.quantity, 0);
        assert!(!payload.status);
        assert_eq!(payload.normalized_request_id(), None);
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert!(serde_json::from_str::<CreateRoomItem>(r#"{"room_id": 10, "name": "Lamp", "date": "yesterday"}"#).is_err());
    }

    #[test]
    fn absent_request_id_is_left_alone_on_update() {
        let mut updated = item();
        let patch: UpdateRoomItem = serde_json::from_str(r#"{"status": true}"#).unwrap();
        patch.merge_into(&mut updated);
        assert!(updated.status);
        assert_eq!(updated.request_id, Some(5));
        assert_eq!(updated.name, "Chair");
        assert_eq!(updated.quantity, 4);
    }

    #[test]
    fn explicit_null_detaches_request() {
        let mut updated = item();
        let patch: UpdateRoomItem = serde_json::from_str(r#"{"request_id": null}"#).unwrap();
        assert_eq!(patch.request_id, Some(None));
        patch.merge_into(&mut updated);
        assert_eq!(updated.request_id, None);
        assert_eq!(updated.room_id, 10);
    }

    #[test]
    fn update_writes_request_id_verbatim() {
        let mut updated = item();
        let patch: UpdateRoomItem = serde_json::from_str(r#"{"request_id": 7, "quantity": 0}"#).unwrap();
        patch.merge_into(&mut updated);
        assert_eq!(updated.request_id, Some(7));
        assert_eq!(updated.quantity, 0);
    }
}
