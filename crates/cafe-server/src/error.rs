//! Request failure responses

use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use cafe_core::CafeError;
use serde_json::json;
use thiserror::Error;

/// Failure of an HTML page handler
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PageError(#[from] pub CafeError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
    }
}

/// Failure of a JSON endpoint
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub CafeError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            CafeError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
            CafeError::ConstraintViolation { .. } => (StatusCode::CONFLICT, "constraint_violation"),
            CafeError::StoreUnavailable(_) | CafeError::CorruptRow(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable")
            }
        };

        let message = if status.is_server_error() {
            tracing::error!("API request failed: {}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));
        (status, body).into_response()
    }
}
