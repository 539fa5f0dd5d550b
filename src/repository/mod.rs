//! Explicit data access per entity. Every statement is parameterized; relationships are
//! separate lookup queries, never implicit loads.

mod building;
mod campus;
mod request;
mod room;
mod room_item;

pub use building::BuildingRepository;
pub use campus::CampusRepository;
pub use request::RequestRepository;
pub use room::RoomRepository;
pub use room_item::RoomItemRepository;
