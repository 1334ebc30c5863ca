//! Record store trait for key-value persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::record::{Item, ScanFilter, TableDef};

/// Narrow key-value interface over the managed record store.
///
/// Implemented by the DynamoDB client and an in-memory store in
/// `geticard-database`. Handles are shared read-only across requests and
/// must be safe for concurrent use.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "dynamodb", "memory").
    fn provider_type(&self) -> &str;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Fetch a single record by partition key.
    async fn get_item(&self, table: &TableDef, key: &str) -> AppResult<Option<Item>>;

    /// Upsert a record, fully overwriting any existing record with the same key.
    async fn put_item(&self, table: &TableDef, item: Item) -> AppResult<()>;

    /// Full-table scan, optionally keeping only records that match `filter`.
    ///
    /// There is no index behind the filter and result order is undefined.
    async fn scan(&self, table: &TableDef, filter: Option<&ScanFilter>) -> AppResult<Vec<Item>>;
}
