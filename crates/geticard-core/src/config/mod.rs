//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files plus `GETICARD__*` environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod logging;
pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{ApiConfig, CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_ACCESS_TTL_MINUTES};
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;
pub use self::store::{StoreConfig, StoreProvider};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token signing settings. The secret has no default and must be supplied.
    pub auth: AuthConfig,
    /// Record store connection settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Local image storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Optional API surface toggles.
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `{dir}/default.toml`, an optional
    /// `{dir}/{env}.toml` overlay, and environment variables prefixed with
    /// `GETICARD` (`GETICARD__AUTH__JWT_SECRET=...`).
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("GETICARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations that would start a server in an unusable state.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if !(1..=MAX_ACCESS_TTL_MINUTES).contains(&self.auth.access_ttl_minutes) {
            return Err(AppError::configuration(format!(
                "auth.access_ttl_minutes must be between 1 and {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        if self.store.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "store.request_timeout_seconds must be greater than zero",
            ));
        }
        if !self.storage.public_prefix.starts_with('/') {
            return Err(AppError::configuration(
                "storage.public_prefix must start with '/'",
            ));
        }
        if self.store.provider == StoreProvider::Dynamodb && self.store.region.trim().is_empty() {
            return Err(AppError::configuration(
                "store.region is required for the dynamodb provider",
            ));
        }
        Ok(())
    }
}
