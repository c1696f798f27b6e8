//! # Error Types
//!
//! Typed validation errors for emporium-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when console input doesn't meet requirements.
/// Raised before any statement reaches the gateway.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not a whole number.
    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: String, value: String },

    /// Value is not a decimal number.
    #[error("{field} must be a number, got '{value}'")]
    NotADecimal { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::NotAnInteger {
            field: "quantity".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be an integer, got 'abc'");

        let err = ValidationError::OutOfRange {
            field: "latitude".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "latitude must be between 0 and 100");
    }
}
