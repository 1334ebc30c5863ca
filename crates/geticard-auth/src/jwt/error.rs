//! Token verification failures.

use geticard_core::error::AppError;
use thiserror::Error;

/// Why a presented token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature does not match the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token is past its `exp` claim.
    #[error("token has expired")]
    Expired,
    /// The token could not be parsed or its claims are unusable.
    #[error("malformed token: {0}")]
    Malformed(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authorization(err.to_string())
    }
}
