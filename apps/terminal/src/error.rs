//! # Application Error Type
//!
//! Unified error type for the terminal layer.
//!
//! ## Error Handling Strategy
//! The dispatcher is the error boundary. Database and validation failures
//! are printed and the menu continues; console failures (closed stdin,
//! broken pipe) end the session.

use std::io;
use thiserror::Error;

use emporium_core::ValidationError;
use emporium_db::DbError;

/// Errors surfaced by menu handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Statement execution failed; printed, menu continues.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Console input failed validation; printed, menu continues.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A query produced a row the handler cannot interpret.
    #[error("unexpected result shape: {0}")]
    Data(String),

    /// Console read or write failed; ends the session.
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Whether the dispatcher can print this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }
}

/// Result type for menu handlers.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        let db = AppError::Db(DbError::QueryFailed("relation missing".to_string()));
        assert!(db.is_recoverable());

        let io = AppError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        assert!(!io.is_recoverable());
    }
}
