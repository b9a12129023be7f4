//! Uniform response envelope returned by every customer operation.
//!
//! An envelope carries an optional result and an optional error. Expected
//! "nothing to do" outcomes are expressed as a result (for example `false`)
//! with no error, while failures always leave `result` empty and populate
//! `error`, so callers never have to guess from default values.

use serde::{Deserialize, Serialize};

use crate::repository::errors::RepositoryError;

/// Machine readable classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    ConstraintViolation,
    ConnectionError,
    CorruptRecord,
    DatabaseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Error for input rejected before it reached a service.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }
}

impl From<&RepositoryError> for ApiError {
    fn from(err: &RepositoryError) -> Self {
        let code = match err {
            RepositoryError::Unavailable(_) => ErrorCode::ConnectionError,
            RepositoryError::ConstraintViolation(_) => ErrorCode::ConstraintViolation,
            RepositoryError::CorruptRecord(_) => ErrorCode::CorruptRecord,
            RepositoryError::Query(_) => ErrorCode::DatabaseError,
        };
        Self::new(code, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }
}

impl<T> From<RepositoryError> for ApiResponse<T> {
    fn from(err: RepositoryError) -> Self {
        Self::failure(ApiError::from(&err))
    }
}
