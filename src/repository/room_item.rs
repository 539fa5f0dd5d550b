use crate::error::AppError;
use crate::models::{CreateRoomItem, RoomItem, UpdateRoomItem};
use sqlx::PgPool;

const COLUMNS: &str = "id, request_id, room_id, name, quantity, date, status, created_at, updated_at";

pub struct RoomItemRepository;

impl RoomItemRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<RoomItem>, AppError> {
        let sql = format!("SELECT {} FROM room_items ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, RoomItem>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn list_by_room(pool: &PgPool, room_id: i32) -> Result<Vec<RoomItem>, AppError> {
        let sql = format!("SELECT {} FROM room_items WHERE room_id = $1 ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, room_id, "query");
        let rows = sqlx::query_as::<_, RoomItem>(&sql)
            .bind(room_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Items of several rooms in one round trip. Empty input skips the query.
    pub async fn list_by_rooms(pool: &PgPool, room_ids: &[i32]) -> Result<Vec<RoomItem>, AppError> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT {} FROM room_items WHERE room_id = ANY($1) ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, rooms = room_ids.len(), "query");
        let rows = sqlx::query_as::<_, RoomItem>(&sql)
            .bind(room_ids)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<RoomItem>, AppError> {
        let sql = format!("SELECT {} FROM room_items WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, RoomItem>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one item; `request_id` 0 is stored as NULL.
    pub async fn create(pool: &PgPool, payload: &CreateRoomItem) -> Result<RoomItem, AppError> {
        let sql = format!(
            "INSERT INTO room_items (request_id, room_id, name, quantity, date, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, RoomItem>(&sql)
            .bind(payload.normalized_request_id())
            .bind(payload.room_id)
            .bind(&payload.name)
            .bind(payload.quantity)
            .bind(payload.date)
            .bind(payload.status)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(pool: &PgPool, id: i32, patch: UpdateRoomItem) -> Result<Option<RoomItem>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM room_items WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %select, id, "query (tx)");
        let Some(mut item) = sqlx::query_as::<_, RoomItem>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        patch.merge_into(&mut item);

        let sql = format!(
            "UPDATE room_items SET request_id = $2, room_id = $3, name = $4, quantity = $5, date = $6, \
             status = $7, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, RoomItem>(&sql)
            .bind(id)
            .bind(item.request_id)
            .bind(item.room_id)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.date)
            .bind(item.status)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM room_items WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(deleted.is_some())
    }
}
