//! Record store construction from configuration.

use std::sync::Arc;

use tracing::info;

use geticard_core::config::{StoreConfig, StoreProvider};
use geticard_core::result::AppResult;
use geticard_core::traits::RecordStore;

use crate::dynamo::DynamoRecordStore;
use crate::memory::MemoryRecordStore;

/// Build the configured record store backend.
pub async fn create_store(config: &StoreConfig) -> AppResult<Arc<dyn RecordStore>> {
    match config.provider {
        StoreProvider::Dynamodb => {
            info!(
                region = %config.region,
                endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
                static_credentials = config.has_static_credentials(),
                "Connecting to DynamoDB"
            );
            let store = DynamoRecordStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        StoreProvider::Memory => {
            info!("Using in-memory record store; data will not survive a restart");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
    }
}
