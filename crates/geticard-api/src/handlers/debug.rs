//! Diagnostic dump of the cards table.

use axum::Json;
use axum::extract::State;

use geticard_core::types::record::Item;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /debug-dynamo
///
/// Returns every stored card record as-is. Mounted only when
/// `api.debug_routes` is enabled.
pub async fn dump_cards(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.card_service.list_all().await?;
    tracing::debug!(count = items.len(), "Dumped card table");
    Ok(Json(items))
}
