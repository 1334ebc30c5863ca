//! User entity and registration schema.

pub mod model;

pub use model::{Credentials, NewUser, User};
