//! Domain error types.

use store::StoreError;
use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No record of the given type has the id.
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// The payload failed a boundary check.
    #[error("{0}")]
    InvalidArgument(String),

    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument(message.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            // A conditional replace that lost a race with a delete.
            StoreError::NotFound { entity, id } => DomainError::NotFound { entity, id },
            other => DomainError::Store(other),
        }
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
