//! # geticard-database
//!
//! Record store backends and typed repositories for GetiCard.
//!
//! - [`dynamo::DynamoRecordStore`] talks to Amazon DynamoDB.
//! - [`memory::MemoryRecordStore`] keeps tables in process memory for tests
//!   and local development.
//! - [`repositories`] map `User` and `Card` onto the two tables.

pub mod connection;
pub mod dynamo;
pub mod memory;
pub mod repositories;

pub use connection::create_store;
pub use dynamo::DynamoRecordStore;
pub use memory::MemoryRecordStore;
