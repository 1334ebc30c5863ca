//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::BearerGuard;
pub use json::JsonBody;
