//! In-memory record store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use geticard_core::error::AppError;
use geticard_core::result::AppResult;
use geticard_core::traits::RecordStore;
use geticard_core::types::record::{Item, ScanFilter, TableDef};

/// Record store that keeps every table in a concurrent map.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    tables: Arc<DashMap<String, DashMap<String, Item>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `table`.
    pub fn len(&self, table: &TableDef) -> usize {
        self.tables.get(&table.name).map(|t| t.len()).unwrap_or(0)
    }

    /// Whether `table` holds no records.
    pub fn is_empty(&self, table: &TableDef) -> bool {
        self.len(table) == 0
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn get_item(&self, table: &TableDef, key: &str) -> AppResult<Option<Item>> {
        Ok(self
            .tables
            .get(&table.name)
            .and_then(|t| t.get(key).map(|record| record.value().clone())))
    }

    async fn put_item(&self, table: &TableDef, item: Item) -> AppResult<()> {
        let key = table
            .key_of(&item)
            .ok_or_else(|| {
                AppError::database(format!(
                    "Record for '{}' is missing string key '{}'",
                    table.name, table.key_attribute
                ))
            })?
            .to_string();

        self.tables
            .entry(table.name.clone())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    async fn scan(&self, table: &TableDef, filter: Option<&ScanFilter>) -> AppResult<Vec<Item>> {
        let Some(records) = self.tables.get(&table.name) else {
            return Ok(Vec::new());
        };

        let items: Vec<Item> = records
            .iter()
            .filter(|record| filter.is_none_or(|f| f.matches(record.value())))
            .map(|record| record.value().clone())
            .collect();

        debug!(table = %table.name, matched = items.len(), "Scan complete");
        Ok(items)
    }
}
