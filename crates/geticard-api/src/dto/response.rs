//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement for card writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardAckResponse {
    /// Human-readable message.
    pub message: String,
    /// Id of the affected card.
    pub card_id: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// Card linked to the login email, or `null`.
    pub card_id: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Record store backend and reachability.
    pub store: StoreHealth,
    /// Whether the upload directory is usable.
    pub uploads: bool,
}

/// Record store section of the health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHealth {
    /// Backend name.
    pub provider: String,
    /// Whether the backend answered.
    pub reachable: bool,
}
