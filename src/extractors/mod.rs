//! Request extractors that reject with [`AppError`](crate::error::AppError) so every failure
//! shares one error body.

mod id;
mod payload;

pub use id::EntityId;
pub use payload::Payload;
