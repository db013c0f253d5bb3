use models::ValidationError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl ServiceError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::Rule(message.into()))
    }
}

/// Constraint violations reported by the database become client errors;
/// everything else stays a database error
impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::Conflict(format!("duplicate record: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::rule(format!("referenced record does not exist: {detail}"))
            }
            _ => Self::Database(err),
        }
    }
}

/// Maps a duplicate-key violation to a domain-specific conflict message
pub(crate) fn on_duplicate(message: &'static str) -> impl FnOnce(DbErr) -> ServiceError {
    move |err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::conflict(message),
        _ => ServiceError::from(err),
    }
}
