//! Card handlers: create, fetch, and update.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use geticard_entity::card::Card;
use geticard_service::CardCreation;

use crate::dto::response::CardAckResponse;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /card
///
/// 201 for a new card, 200 with the existing id when the contact email is
/// already in use.
pub async fn create_card(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<CardAckResponse>), ApiError> {
    let (status, message, card_id) = match state.card_service.create(body).await? {
        CardCreation::Created { card_id } => {
            (StatusCode::CREATED, "Card created successfully", card_id)
        }
        CardCreation::Existing { card_id } => {
            (StatusCode::OK, "Card already exists for this email", card_id)
        }
    };

    Ok((
        status,
        Json(CardAckResponse {
            message: message.to_string(),
            card_id,
        }),
    ))
}

/// GET /card/{card_id}
pub async fn get_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let card = state.card_service.get(&card_id).await?;
    Ok(Json(card))
}

/// PUT /card/{card_id}
pub async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<CardAckResponse>, ApiError> {
    let card = state.card_service.update(&card_id, body).await?;
    Ok(Json(CardAckResponse {
        message: "Card updated successfully".to_string(),
        card_id: card.card_id,
    }))
}
