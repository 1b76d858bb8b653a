//! Repository error classification.

use thiserror::Error;

use crate::model::{Entity, EntityId};

/// Outcome of a failed repository call.
///
/// Constraint failures reported by the store are classified on the way in
/// (`From<sqlx::Error>`); everything else is carried through untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(Entity),

    /// A UNIQUE constraint rejected the write.
    #[error("{0}")]
    DuplicateKey(String),

    /// A FOREIGN KEY constraint rejected the write.
    #[error("{0}")]
    ForeignKey(String),

    /// The row is still referenced and cannot be removed.
    #[error("University {0} still has enrolled students")]
    HasDependents(EntityId),

    #[error(transparent)]
    Store(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return RepositoryError::DuplicateKey(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepositoryError::ForeignKey(db_err.message().to_string());
            }
        }
        RepositoryError::Store(err)
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
