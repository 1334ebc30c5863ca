//! `JsonBody` extractor: the raw JSON request body, rejected with a 400.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde_json::Value;

use geticard_core::error::{AppError, FieldError};

use crate::error::ApiError;

/// Untyped JSON body.
///
/// Bodies are parsed regardless of `Content-Type`; schema validation happens
/// in the service layer so that field errors can be reported together.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            ApiError(AppError::invalid_fields(
                "Request body must be valid JSON",
                vec![FieldError::new("body", "json", e.to_string())],
            ))
            .into_response()
        })
    }
}
