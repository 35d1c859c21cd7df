//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can return is an [`AppError`]. The JSON body is
//! always `{"error": "<message>"}`; store failures are logged and reported
//! with a generic message so internals never reach the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::StoreError;

/// Message returned for any failure that is not the caller's fault.
pub const GENERIC_ERROR_MESSAGE: &str = "Server error";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Code must be 6-8 alphanumeric characters")]
    InvalidCode,

    #[error("Code already exists")]
    DuplicateCode(String),

    #[error("Link not found")]
    NotFound(String),

    /// The request body could not be read as JSON.
    #[error("{0}")]
    BadRequest(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidCode | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::DuplicateCode(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateCode(code) => AppError::DuplicateCode(code),
            StoreError::Unavailable(message) => AppError::StoreUnavailable(message),
            StoreError::Query(message) => AppError::Internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
