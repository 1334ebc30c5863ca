//! HTTP request handlers.

pub mod auth;
pub mod card;
pub mod debug;
pub mod health;
pub mod protected;
pub mod uploads;
