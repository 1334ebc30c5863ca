//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted access token lifetime (one year).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Process-wide secret for HMAC-SHA256 token signing.
    pub jwt_secret: String,
    /// Access token lifetime in minutes, 1 to [`MAX_ACCESS_TTL_MINUTES`].
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
}

fn default_access_ttl() -> u64 {
    15
}
