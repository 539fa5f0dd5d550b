use crate::error::AppError;
use crate::models::{CreateRoom, Room, UpdateRoom};
use sqlx::PgPool;

const COLUMNS: &str = "id, building_id, name, floor, created_at, updated_at";

pub struct RoomRepository;

impl RoomRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, AppError> {
        let sql = format!("SELECT {} FROM rooms ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Room>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Rooms of one building, in id order.
    pub async fn list_by_building(pool: &PgPool, building_id: i32) -> Result<Vec<Room>, AppError> {
        let sql = format!("SELECT {} FROM rooms WHERE building_id = $1 ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, building_id, "query");
        let rows = sqlx::query_as::<_, Room>(&sql)
            .bind(building_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Room>, AppError> {
        let sql = format!("SELECT {} FROM rooms WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Room>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, payload: &CreateRoom) -> Result<Room, AppError> {
        let sql = format!(
            "INSERT INTO rooms (building_id, name, floor) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Room>(&sql)
            .bind(payload.building_id)
            .bind(&payload.name)
            .bind(payload.floor)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(pool: &PgPool, id: i32, patch: UpdateRoom) -> Result<Option<Room>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM rooms WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %select, id, "query (tx)");
        let Some(mut room) = sqlx::query_as::<_, Room>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        patch.merge_into(&mut room);

        let sql = format!(
            "UPDATE rooms SET building_id = $2, name = $3, floor = $4, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, Room>(&sql)
            .bind(id)
            .bind(room.building_id)
            .bind(&room.name)
            .bind(room.floor)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM rooms WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(deleted.is_some())
    }
}
