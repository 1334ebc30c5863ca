//! DynamoDB-backed record store.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, warn};

use geticard_core::config::StoreConfig;
use geticard_core::error::{AppError, ErrorKind};
use geticard_core::result::AppResult;
use geticard_core::traits::RecordStore;
use geticard_core::types::record::{Item, ScanFilter, TableDef};

use super::convert::{attributes_to_item, item_to_attributes};

/// Record store backed by Amazon DynamoDB.
///
/// Every request is bounded by the configured timeout so a slow or
/// unreachable endpoint surfaces as a database error instead of a hung
/// request.
#[derive(Debug, Clone)]
pub struct DynamoRecordStore {
    client: Client,
    timeout: Duration,
}

impl DynamoRecordStore {
    /// Load AWS configuration for `config` and build a client.
    ///
    /// Static credentials are used when both key fields are set; otherwise
    /// the default AWS provider chain resolves them.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if config.has_static_credentials() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key_id.clone(),
                config.secret_access_key.clone(),
                None,
                None,
                "geticard-config",
            ));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint.clone());
        }

        let shared = loader.load().await;
        Ok(Self::from_client(
            Client::new(&shared),
            Duration::from_secs(config.request_timeout_seconds),
        ))
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn bounded<T, E, F>(&self, operation: &'static str, table: &str, request: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => {
                let detail = DisplayErrorContext(&e).to_string();
                warn!(operation, table, error = %detail, "DynamoDB request failed");
                Err(AppError::with_source(
                    ErrorKind::Database,
                    format!("DynamoDB {operation} on '{table}' failed"),
                    e,
                ))
            }
            Err(_) => {
                warn!(operation, table, timeout = ?self.timeout, "DynamoDB request timed out");
                Err(AppError::database(format!(
                    "DynamoDB {operation} on '{table}' timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        }
    }
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    fn provider_type(&self) -> &str {
        "dynamodb"
    }

    async fn health_check(&self) -> AppResult<bool> {
        let result = self
            .bounded("ListTables", "*", self.client.list_tables().limit(1).send())
            .await;
        Ok(result.is_ok())
    }

    async fn get_item(&self, table: &TableDef, key: &str) -> AppResult<Option<Item>> {
        let output = self
            .bounded(
                "GetItem",
                &table.name,
                self.client
                    .get_item()
                    .table_name(&table.name)
                    .key(&table.key_attribute, AttributeValue::S(key.to_string()))
                    .send(),
            )
            .await?;

        output.item.as_ref().map(attributes_to_item).transpose()
    }

    async fn put_item(&self, table: &TableDef, item: Item) -> AppResult<()> {
        if table.key_of(&item).is_none() {
            return Err(AppError::database(format!(
                "Record for '{}' is missing string key '{}'",
                table.name, table.key_attribute
            )));
        }

        self.bounded(
            "PutItem",
            &table.name,
            self.client
                .put_item()
                .table_name(&table.name)
                .set_item(Some(item_to_attributes(item)))
                .send(),
        )
        .await?;
        Ok(())
    }

    async fn scan(&self, table: &TableDef, filter: Option<&ScanFilter>) -> AppResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        loop {
            let mut request = self
                .client
                .scan()
                .table_name(&table.name)
                .set_exclusive_start_key(start_key.take());
            if let Some(filter) = filter {
                request = request
                    .filter_expression("#f = :v")
                    .expression_attribute_names("#f", &filter.attribute)
                    .expression_attribute_values(":v", AttributeValue::S(filter.equals.clone()));
            }

            let output = self.bounded("Scan", &table.name, request.send()).await?;
            pages += 1;

            for attributes in output.items.as_deref().unwrap_or_default() {
                items.push(attributes_to_item(attributes)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        debug!(table = %table.name, pages, matched = items.len(), "Scan complete");
        Ok(items)
    }
}
