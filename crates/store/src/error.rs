use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

/// Errors that can occur when interacting with the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A replace targeted a record that does not exist (any more).
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A uniqueness, foreign-key, not-null or check constraint rejected the write.
    #[error("constraint {constraint} violated: {message}")]
    ConstraintViolation { constraint: String, message: String },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored value could not be decoded into the record model.
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub(crate) fn constraint(constraint: &str, message: impl Into<String>) -> Self {
        StoreError::ConstraintViolation {
            constraint: constraint.to_string(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let is_constraint = matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            );
            if is_constraint {
                // Postgres puts the offending key in the detail line.
                let message = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.detail())
                    .unwrap_or_else(|| db_err.message());
                return StoreError::constraint(db_err.constraint().unwrap_or("unknown"), message);
            }
        }
        StoreError::Database(err)
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
