use crate::error::AppError;
use crate::models::{Building, CreateBuilding, UpdateBuilding};
use sqlx::PgPool;

const COLUMNS: &str = "id, campus_id, tip, floors, created_at, updated_at";

pub struct BuildingRepository;

impl BuildingRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Building>, AppError> {
        let sql = format!("SELECT {} FROM buildings ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Building>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Building>, AppError> {
        let sql = format!("SELECT {} FROM buildings WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Building>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, payload: &CreateBuilding) -> Result<Building, AppError> {
        let sql = format!(
            "INSERT INTO buildings (campus_id, tip, floors) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Building>(&sql)
            .bind(payload.campus_id)
            .bind(payload.tip)
            .bind(payload.floors)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(pool: &PgPool, id: i32, patch: UpdateBuilding) -> Result<Option<Building>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM buildings WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %select, id, "query (tx)");
        let Some(mut building) = sqlx::query_as::<_, Building>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        patch.merge_into(&mut building);

        let sql = format!(
            "UPDATE buildings SET campus_id = $2, tip = $3, floors = $4, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, Building>(&sql)
            .bind(id)
            .bind(building.campus_id)
            .bind(building.tip)
            .bind(building.floors)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM buildings WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(deleted.is_some())
    }
}
