//! # API Errors
//!
//! Error types for the HTTP API, with their status-code mapping and
//! JSON serialization.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Member not found
    #[error("Member not found: {0}")]
    MemberNotFound(u32),

    /// Member id already taken
    #[error("A member with id {0} already exists")]
    DuplicateId(u32),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateId(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(id) => ApiError::DuplicateId(id),
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            status_code: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
