//! Response bodies shared by all entity routes.

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation returned by every delete route.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Deleted {
    pub message: String,
}

impl Deleted {
    pub fn new(entity: &str, id: i32) -> Self {
        Deleted {
            message: format!("{} {} deleted", entity, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_entity_and_id() {
        let body = serde_json::to_value(Deleted::new("RoomItem", 12)).unwrap();
        assert_eq!(body, serde_json::json!({"message": "RoomItem 12 deleted"}));
    }
}
