//! `BearerGuard` extractor: requires a valid access token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use geticard_auth::jwt::{Claims, TokenError};
use geticard_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims of a verified bearer token.
///
/// A missing header is a 401; a header that is present but carries a
/// malformed, forged, or expired token is a 403.
#[derive(Debug, Clone)]
pub struct BearerGuard(pub Claims);

impl std::ops::Deref for BearerGuard {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for BearerGuard {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| TokenError::Malformed("expected 'Bearer <token>'".to_string()))?;

        let claims = state.jwt_decoder.verify(token)?;
        Ok(BearerGuard(claims))
    }
}
