use sea_orm::{DbErr, SqlErr};

/// The error type for database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A generic database error occurred.
    #[error("database error: {0}")]
    Database(DbErr),
    /// An insert collided with an already persisted row. The caller's cue
    /// to skip rather than retry.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The connection to the backing store failed. The caller may retry
    /// with backoff.
    #[error("database connection error: {0}")]
    Connection(String),
}

impl From<DbErr> for DatabaseError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) |
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::ConstraintViolation(msg)
            }
            _ => {}
        }
        if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
            return Self::Connection(err.to_string());
        }
        Self::Database(err)
    }
}
