//! JWT token validation.

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use mockable::Clock;
use tracing::debug;

use geticard_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;

/// Verifies HS256 tokens issued by [`super::JwtEncoder`].
///
/// Expiry is checked against the injected clock rather than the library's
/// wall-clock check, so tests can move time forward.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Source of the current time.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            clock,
        }
    }

    /// Verifies signature and expiry, returning the claims on success.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    JwtErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(self.clock.utc()) {
            debug!(sub = %claims.sub, exp = claims.exp, "Rejected expired token");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
