//! Row records, request payloads and partial-update merges for the five entities.

pub mod building;
pub mod campus;
pub mod request;
pub mod room;
pub mod room_item;

pub use building::*;
pub use campus::*;
pub use request::*;
pub use room::*;
pub use room_item::*;

use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit JSON `null` (`Some(None)`) from an absent key (`None`, via `#[serde(default)]`).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
