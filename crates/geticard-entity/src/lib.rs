//! # geticard-entity
//!
//! Domain entity models for GetiCard. `User` and `Card` are the records
//! persisted in the key-value store; the `New*` types are the validated
//! request schemas they are created from.

pub mod card;
pub mod schema;
pub mod user;

pub use card::{Card, NewCard};
pub use user::{Credentials, NewUser, User};
