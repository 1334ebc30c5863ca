//! Amazon DynamoDB backend.

pub mod client;
pub mod convert;

pub use client::DynamoRecordStore;
