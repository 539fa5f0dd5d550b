//! HTTP handlers, one module per entity. Each exposes list, read, create, update, delete.

pub mod building;
pub mod campus;
pub mod request;
pub mod room;
pub mod room_item;
