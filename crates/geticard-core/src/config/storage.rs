//! Local image storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded profile and gallery images are written and how they are
/// referenced from card records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory that holds uploaded images.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Prefix written into stored image references. Must start with `/`.
    /// The server itself always serves uploads at `/uploads/{filename}`;
    /// another prefix assumes a proxy or CDN maps it onto that directory.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}
