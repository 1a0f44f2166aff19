//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid bind address '{0}'")]
    InvalidBind(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Note not found with id: {0}")]
    NotFound(u64),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not Found",
            AppError::Validation(_) => "Validation Failed",
            AppError::BadRequest(_) => "Bad Request",
            AppError::Internal(_) => "Internal Server Error",
        }
    }

    /// Bind the request path, producing the renderable error.
    pub fn at(self, path: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: self,
            path: path.into(),
        }
    }
}

/// An [`AppError`] bound to the request path it was raised on. Every non-2xx
/// body carries the path, so handlers go through [`AppError::at`].
#[derive(Debug)]
pub struct ErrorResponse {
    error: AppError,
    path: String,
}

#[derive(Serialize)]
struct ErrorBody {
    timestamp: String,
    status: u16,
    error: String,
    message: String,
    path: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let body = ErrorBody {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: self.error.label().to_string(),
            message: self.error.to_string(),
            path: self.path,
        };
        (status, Json(body)).into_response()
    }
}
