//! Record store (DynamoDB) configuration.

use serde::{Deserialize, Serialize};

/// Which record store backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Amazon DynamoDB (or a compatible endpoint).
    Dynamodb,
    /// Process-local in-memory tables; data is lost on restart.
    Memory,
}

/// Record store connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use.
    #[serde(default = "default_provider")]
    pub provider: StoreProvider,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Static access key ID. When empty, the default AWS credential chain is used.
    #[serde(default)]
    pub access_key_id: String,
    /// Static secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// Endpoint override (DynamoDB Local, LocalStack).
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Users table name (partition key `email`).
    #[serde(default = "default_users_table")]
    pub users_table: String,
    /// Cards table name (partition key `card_id`).
    #[serde(default = "default_cards_table")]
    pub cards_table: String,
    /// Upper bound for every store call, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            region: default_region(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            endpoint_url: None,
            users_table: default_users_table(),
            cards_table: default_cards_table(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl StoreConfig {
    /// Whether a static credential pair was supplied.
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

fn default_provider() -> StoreProvider {
    StoreProvider::Dynamodb
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_users_table() -> String {
    "GetiCardUsers".to_string()
}

fn default_cards_table() -> String {
    "GetiCardCards".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
