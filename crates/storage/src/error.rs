use thiserror::Error;

use crate::services::handicap::HandicapError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Handicap(#[from] HandicapError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct PgViolation(&'static str);

    impl fmt::Display for PgViolation {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "violates constraint (SQLSTATE {})", self.0)
        }
    }

    impl StdError for PgViolation {}

    impl sqlx::error::DatabaseError for PgViolation {
        fn message(&self) -> &str {
            "violates constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                _ => sqlx::error::ErrorKind::ForeignKeyViolation,
            }
        }
    }

    fn violation(code: &'static str) -> StorageError {
        StorageError::Database(sqlx::Error::Database(Box::new(PgViolation(code))))
    }

    #[test]
    fn unique_violation_is_recognized_by_sqlstate() {
        assert!(violation("23505").is_unique_violation());
        assert!(!violation("23503").is_unique_violation());
        assert!(!StorageError::NotFound.is_unique_violation());
    }

    #[test]
    fn foreign_key_violation_is_recognized_by_sqlstate() {
        assert!(violation("23503").is_foreign_key_violation());
        assert!(!violation("23505").is_foreign_key_violation());
        assert!(!StorageError::NotFound.is_foreign_key_violation());
    }
}
