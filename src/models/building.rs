use crate::error::AppError;
use crate::models::double_option;
use crate::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Kind of building. JSON carries the display names, PostgreSQL the `building_tip` labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "building_tip", rename_all = "lowercase")]
pub enum BuildingTip {
    #[serde(rename = "Yotoqxona")]
    Dorm,
    #[serde(rename = "Labaratoriya")]
    Lab,
    #[serde(rename = "Sportzal")]
    Sport,
    #[serde(rename = "Kutubxona")]
    Library,
}

/// A row of `buildings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Building {
    pub id: i32,
    pub campus_id: i32,
    pub tip: Option<BuildingTip>,
    pub floors: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateBuilding {
    pub campus_id: i32,
    pub tip: BuildingTip,
    pub floors: i32,
}

/// Partial update. An explicit `"tip": null` clears the kind.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBuilding {
    pub campus_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<BuildingTip>)]
    pub tip: Option<Option<BuildingTip>>,
    pub floors: Option<i32>,
}

impl UpdateBuilding {
    pub fn merge_into(self, building: &mut Building) {
        if let Some(campus_id) = self.campus_id {
            building.campus_id = campus_id;
        }
        if let Some(tip) = self.tip {
            building.tip = tip;
        }
        if let Some(floors) = self.floors {
            building.floors = floors;
        }
    }
}

impl Validate for CreateBuilding {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Validate for UpdateBuilding {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}
