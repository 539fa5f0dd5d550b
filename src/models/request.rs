use crate::error::AppError;
use crate::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `requests`. `user_id` is an opaque reference; no users table exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateRequest {
    pub user_id: i32,
    pub room_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub user_id: Option<i32>,
    pub room_id: Option<i32>,
}

impl UpdateRequest {
    pub fn merge_into(self, request: &mut Request) {
        if let Some(user_id) = self.user_id {
            request.user_id = user_id;
        }
        if let Some(room_id) = self.room_id {
            request.room_id = room_id;
        }
    }
}

impl Validate for CreateRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Validate for UpdateRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge() {
        let now = Utc::now();
        let mut request = Request {
            id: 5,
            user_id: 42,
            room_id: 10,
            created_at: now,
            updated_at: now,
        };
        let patch: UpdateRequest = serde_json::from_str(r#"{"user_id": 43}"#).unwrap();
        patch.merge_into(&mut request);
        assert_eq!(request.user_id, 43);
        assert_eq!(request.room_id, 10);
    }
}
