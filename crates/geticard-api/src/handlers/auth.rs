//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.user_service.register(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state.user_service.login(body).await?;
    Ok(Json(LoginResponse {
        access_token: outcome.access_token,
        token_type: "Bearer".to_string(),
        expires_at: outcome.expires_at,
        card_id: outcome.card_id,
    }))
}
