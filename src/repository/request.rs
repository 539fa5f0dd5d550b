use crate::error::AppError;
use crate::models::{CreateRequest, Request, UpdateRequest};
use sqlx::PgPool;

const COLUMNS: &str = "id, user_id, room_id, created_at, updated_at";

pub struct RequestRepository;

impl RequestRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Request>, AppError> {
        let sql = format!("SELECT {} FROM requests ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Request>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Request>, AppError> {
        let sql = format!("SELECT {} FROM requests WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Request>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, payload: &CreateRequest) -> Result<Request, AppError> {
        let sql = format!(
            "INSERT INTO requests (user_id, room_id) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Request>(&sql)
            .bind(payload.user_id)
            .bind(payload.room_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(pool: &PgPool, id: i32, patch: UpdateRequest) -> Result<Option<Request>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM requests WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %select, id, "query (tx)");
        let Some(mut request) = sqlx::query_as::<_, Request>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        patch.merge_into(&mut request);

        let sql = format!(
            "UPDATE requests SET user_id = $2, room_id = $3, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, Request>(&sql)
            .bind(id)
            .bind(request.user_id)
            .bind(request.room_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM requests WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(deleted.is_some())
    }
}
