//! Request payloads accepted by the customer routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod customer;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed request body: {0}")]
    Json(#[from] serde_json::Error),
}
