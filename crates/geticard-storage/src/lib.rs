//! # geticard-storage
//!
//! Image storage for GetiCard: a local filesystem provider and the
//! [`ImageStore`] that turns uploaded base64 images into `/uploads/...`
//! references and serves them back.

pub mod image;
pub mod providers;

pub use image::{ImageStore, StoredImage};
pub use providers::local::LocalStorageProvider;
