use std::fmt::Display;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The write clashes with stored rows (unique key or foreign key).
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl Display) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    pub fn conflict(msg: impl Into<String>) -> Self { Self::Conflict(msg.into()) }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        let kind = e.sql_err();
        if kind.is_some() {
            debug!(error = %e, "constraint violation");
        }
        match kind {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::conflict("a record with the same key already exists"),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Self::conflict("the record is referenced by, or references, rows that do not allow this change")
            }
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_db_errors_stay_db_errors() {
        let err = ServiceError::from(DbErr::Custom("connection reset".into()));
        assert!(matches!(err, ServiceError::Db(msg) if msg.contains("connection reset")));
    }
}
