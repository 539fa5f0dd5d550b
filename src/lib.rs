//! Campus registry: REST backend for campuses, buildings, rooms, room items and requests on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;
pub mod views;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use openapi::ApiDoc;
pub use routes::{app, common_routes, entity_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_schema};
