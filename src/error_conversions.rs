//! Error conversion glue between the domain and the repository layer.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion lives here instead of next to [`TypeConstraintError`].

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::CorruptRecord(val.to_string())
    }
}
