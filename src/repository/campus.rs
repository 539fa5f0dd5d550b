use crate::error::AppError;
use crate::models::{Campus, CreateCampus, UpdateCampus};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, address, created_at, updated_at";

pub struct CampusRepository;

impl CampusRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Campus>, AppError> {
        let sql = format!("SELECT {} FROM campuses ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Campus>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Campus>, AppError> {
        let sql = format!("SELECT {} FROM campuses WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Campus>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, payload: &CreateCampus) -> Result<Campus, AppError> {
        let sql = format!(
            "INSERT INTO campuses (name, address) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Campus>(&sql)
            .bind(&payload.name)
            .bind(&payload.address)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Select, merge, write back in one transaction. `None` when the row does not exist.
    pub async fn update(pool: &PgPool, id: i32, patch: UpdateCampus) -> Result<Option<Campus>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM campuses WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %select, id, "query (tx)");
        let Some(mut campus) = sqlx::query_as::<_, Campus>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        patch.merge_into(&mut campus);

        let sql = format!(
            "UPDATE campuses SET name = $2, address = $3, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, Campus>(&sql)
            .bind(id)
            .bind(&campus.name)
            .bind(&campus.address)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Hard delete. Returns false when no row matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM campuses WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(deleted.is_some())
    }
}
