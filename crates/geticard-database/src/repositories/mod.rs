//! Typed repositories over the record store.

pub mod card;
pub mod user;

pub use card::CardRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use geticard_core::error::{AppError, ErrorKind};
use geticard_core::result::AppResult;
use geticard_core::types::record::Item;

/// Serialize an entity into a store record.
pub(crate) fn to_item<T: Serialize>(entity: &T) -> AppResult<Item> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::internal("Entity did not serialize to a JSON object")),
    }
}

/// Deserialize a store record into an entity.
pub(crate) fn from_item<T: DeserializeOwned>(item: Item, table: &str) -> AppResult<T> {
    serde_json::from_value(Value::Object(item)).map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Malformed record in '{table}'"),
            e,
        )
    })
}
