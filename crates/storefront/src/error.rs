//! Unified error handling for the storefront API.
//!
//! Provides a unified `AppError` type mapped onto HTTP responses. All route
//! handlers return `Result<T, AppError>`. Every variant is recoverable from
//! the user's perspective; none is fatal to the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quickbite_core::CartId;
use serde::Serialize;
use thiserror::Error;

use crate::checkout::FieldErrors;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Checkout submission failed validation; field errors attached.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// The referenced cart does not exist (or was consumed by checkout).
    #[error("cart not found: {0}")]
    CartNotFound(CartId),

    /// Some other resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An order for this cart is already being placed.
    #[error("an order for this cart is already being placed")]
    SubmissionInFlight,

    /// Checkout was attempted on a cart with no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "request error");
        }

        let status = match &self {
            Self::Validation(_) | Self::EmptyCart => StatusCode::UNPROCESSABLE_ENTITY,
            Self::CartNotFound(_) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::SubmissionInFlight => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            Self::Validation(errors) => ErrorBody {
                success: false,
                message: "Please fix the highlighted fields.".to_owned(),
                errors: Some(errors),
            },
            // Don't expose internal error details to clients
            Self::Internal(_) => ErrorBody {
                success: false,
                message: "Internal server error".to_owned(),
                errors: None,
            },
            other => ErrorBody {
                success: false,
                message: other.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
