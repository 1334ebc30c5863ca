//! Core traits defined in `geticard-core` and implemented by other crates.

pub mod record_store;
pub mod storage;

pub use record_store::RecordStore;
pub use storage::StorageProvider;
