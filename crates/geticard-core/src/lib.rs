//! # geticard-core
//!
//! Core crate for GetiCard. Contains the record-store and storage traits,
//! configuration schemas, record/table types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other GetiCard crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
