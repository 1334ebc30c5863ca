//! SHA-256 password digests.

use sha2::{Digest, Sha256};

/// Hashes and verifies passwords.
///
/// The digest is unsalted and deterministic: the same plaintext always yields
/// the same lowercase hex string, which is what the users table stores and
/// what login compares against.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password into a hex SHA-256 digest.
    pub fn hash_password(&self, password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Verifies a plaintext password against a stored digest.
    pub fn verify_password(&self, password: &str, digest: &str) -> bool {
        let computed = self.hash_password(password);
        computed.len() == digest.len()
            && computed
                .bytes()
                .zip(digest.bytes())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}
