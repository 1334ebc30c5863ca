//! Business card entity, creation schema, and allow-listed updates.

pub mod id;
pub mod model;
pub mod update;

pub use id::generate_card_id;
pub use model::{Card, NewCard};
pub use update::EDITABLE_FIELDS;
