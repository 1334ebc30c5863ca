//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{HealthResponse, StoreHealth};
use crate::state::AppState;

/// GET /health
///
/// Always 200; `status` is `"degraded"` when a backend does not answer.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = state.store.health_check().await.unwrap_or(false);
    let uploads = state.images.health_check().await.unwrap_or(false);

    let status = if reachable && uploads { "ok" } else { "degraded" };
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: StoreHealth {
                provider: state.store.provider_type().to_string(),
                reachable,
            },
            uploads,
        }),
    )
}
