//! Token-protected probe.

use axum::Json;

use crate::dto::response::MessageResponse;
use crate::extractors::BearerGuard;

/// GET /segredo
pub async fn secret(BearerGuard(claims): BearerGuard) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Access granted to protected resource for {}",
        claims.subject()
    )))
}
