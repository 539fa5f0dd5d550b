//! Pool lifecycle and bootstrap DDL for the five entity tables.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// `CREATE TYPE` has no IF NOT EXISTS; guard with a catalog lookup.
const CREATE_BUILDING_TIP: &str = r#"
DO $$
BEGIN
    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'building_tip') THEN
        CREATE TYPE building_tip AS ENUM ('dorm', 'lab', 'sport', 'library');
    END IF;
END
$$
"#;

/// Parents before children so the foreign keys resolve.
const TABLES: &[(&str, &str)] = &[
    (
        "campuses",
        r#"
        CREATE TABLE IF NOT EXISTS campuses (
            id SERIAL PRIMARY KEY,
            name VARCHAR(250) NOT NULL,
            address VARCHAR(250) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "buildings",
        r#"
        CREATE TABLE IF NOT EXISTS buildings (
            id SERIAL PRIMARY KEY,
            campus_id INTEGER NOT NULL REFERENCES campuses (id),
            tip building_tip,
            floors INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "rooms",
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id SERIAL PRIMARY KEY,
            building_id INTEGER NOT NULL REFERENCES buildings (id),
            name VARCHAR(250) NOT NULL,
            floor INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "requests",
        r#"
        CREATE TABLE IF NOT EXISTS requests (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL,
            room_id INTEGER NOT NULL REFERENCES rooms (id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "room_items",
        r#"
        CREATE TABLE IF NOT EXISTS room_items (
            id SERIAL PRIMARY KEY,
            request_id INTEGER REFERENCES requests (id),
            room_id INTEGER NOT NULL REFERENCES rooms (id),
            name VARCHAR(250) NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            date DATE NOT NULL,
            status BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Open the process-wide pool. Close it with [`PgPool::close`] on shutdown.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Create the enum type and tables if absent. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_BUILDING_TIP).execute(pool).await?;
    for &(table, ddl) in TABLES {
        tracing::debug!(table, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database plus the name to ensure. `None` when the
/// URL names no database or names `postgres` itself.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
