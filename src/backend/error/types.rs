//! Backend Error Types
//!
//! This module defines the error taxonomy used by HTTP handlers. Every
//! failure a handler can return maps to exactly one of these variants, and
//! each variant maps to exactly one HTTP status code.
//!
//! Store-layer failures surface as `Internal` unless they correspond to a
//! named case: a unique-constraint violation becomes `Conflict` and a
//! missing row becomes `NotFound`.

use axum::http::StatusCode;
use thiserror::Error;

/// Error taxonomy for all API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown user, request, or message ID
    #[error("{0}")]
    NotFound(String),

    /// Duplicate username or duplicate friend-pair state
    #[error("{0}")]
    Conflict(String),

    /// Bad, missing, or expired credential
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but lacking the required relationship or admin role
    #[error("{0}")]
    Forbidden(String),

    /// Malformed mutation (self-request, invalid chat type, ...)
    #[error("{0}")]
    BadRequest(String),

    /// Store failure or other unexpected condition
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::not_found("record not found"),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::conflict("a conflicting record already exists")
            }
            _ => {
                tracing::error!("store error: {:?}", err);
                ApiError::internal(err.to_string())
            }
        }
    }
}
