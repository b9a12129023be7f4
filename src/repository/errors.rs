use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures reported by the customer store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be obtained from the pool.
    #[error("customer store unavailable: {0}")]
    Unavailable(String),

    /// The store refused a write, e.g. a duplicate id or a missing column value.
    #[error("customer record rejected: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be turned back into a customer.
    #[error("stored customer record is malformed: {0}")]
    CorruptRecord(String),

    #[error("customer store query failed: {0}")]
    Query(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::NotNullViolation),
                info,
            ) => {
                let rule = if matches!(kind, DatabaseErrorKind::UniqueViolation) {
                    "duplicate"
                } else {
                    "missing value"
                };
                RepositoryError::ConstraintViolation(format!("{rule}: {}", info.message()))
            }
            DieselError::DeserializationError(e) => RepositoryError::CorruptRecord(e.to_string()),
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::Unavailable(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Unavailable(err.to_string())
    }
}
