//! # Database Error Types
//!
//! Error types for gateway operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  PostgreSQL error (sqlx::Error)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← SQLSTATE-aware categorization                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (terminal app) ← printed, menu continues                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Gateway operation errors.
///
/// These errors wrap sqlx errors and categorize them for user feedback.
/// A statement failure never terminates the process; the handler prints
/// the message and returns to its menu.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection could not be established.
    ///
    /// Raised only at startup; the caller treats it as fatal.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The connection dropped mid-session.
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// Unique constraint violation.
    #[error("duplicate value: {constraint}")]
    UniqueViolation { constraint: String },

    /// Foreign key constraint violation.
    #[error("foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// A column value could not be coerced to text.
    #[error("cannot decode column {column}: {message}")]
    Decode { column: String, message: String },

    /// Statement execution failed (syntax, missing relation, bad cast).
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Anything sqlx reports that fits no category above.
    #[error("internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database + SQLSTATE 23505  → UniqueViolation
/// sqlx::Error::Database + SQLSTATE 23503  → ForeignKeyViolation
/// sqlx::Error::Database (other)           → QueryFailed
/// sqlx::Error::Io                         → ConnectionLost
/// sqlx::Error::ColumnDecode               → Decode
/// Other                                   → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                // PostgreSQL SQLSTATE codes: class 23 is integrity violation
                match db_err.code().as_deref() {
                    Some("23505") => DbError::UniqueViolation {
                        constraint: db_err
                            .constraint()
                            .unwrap_or("unknown constraint")
                            .to_string(),
                    },
                    Some("23503") => DbError::ForeignKeyViolation {
                        message: db_err.message().to_string(),
                    },
                    _ => DbError::QueryFailed(db_err.message().to_string()),
                }
            }

            sqlx::Error::Io(io_err) => DbError::ConnectionLost(io_err.to_string()),

            sqlx::Error::ColumnDecode { index, source } => DbError::Decode {
                column: index,
                message: source.to_string(),
            },

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for gateway operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "connection failed: refused");

        let err = DbError::UniqueViolation {
            constraint: "users_pkey".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate value: users_pkey");
    }
}
