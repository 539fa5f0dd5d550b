use crate::error::AppError;
use crate::validation::{max_length, max_length_opt, Validate, MAX_TEXT_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `campuses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Campus {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateCampus {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCampus {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateCampus {
    pub fn merge_into(self, campus: &mut Campus) {
        if let Some(name) = self.name {
            campus.name = name;
        }
        if let Some(address) = self.address {
            campus.address = address;
        }
    }
}

impl Validate for CreateCampus {
    fn validate(&self) -> Result<(), AppError> {
        max_length("name", &self.name, MAX_TEXT_LEN)?;
        max_length("address", &self.address, MAX_TEXT_LEN)
    }
}

impl Validate for UpdateCampus {
    fn validate(&self) -> Result<(), AppError> {
        max_length_opt("name", self.name.as_deref(), MAX_TEXT_LEN)?;
        max_length_opt("address", self.address.as_deref(), MAX_TEXT_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> Campus {
        let now = Utc::now();
        Campus {
            id: 1,
            name: "Main".into(),
            address: "1 University Rd".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn merge_changes_only_supplied_fields() {
        let before = campus();
        let mut after = before.clone();
        let patch: UpdateCampus = serde_json::from_str(r#"{"address": "2 College Ave"}"#).unwrap();
        patch.merge_into(&mut after);
        assert_eq!(after.address, "2 College Ave");
        assert_eq!(after.name, before.name);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let before = campus();
        let mut after = before.clone();
        UpdateCampus::default().merge_into(&mut after);
        assert_eq!(after, before);
    }

    #[test]
    fn create_requires_both_fields() {
        assert!(serde_json::from_str::<CreateCampus>(r#"{"name": "Main"}"#).is_err());
        let ok: CreateCampus = serde_json::from_str(r#"{"name": "Main", "address": "x"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn overlong_name_fails_validation() {
        let payload = CreateCampus {
            name: "n".repeat(MAX_TEXT_LEN + 1),
            address: "x".into(),
        };
        assert!(matches!(payload.validate(), Err(AppError::Validation(_))));
    }
}
