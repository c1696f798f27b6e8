//! # Validation Module
//!
//! Input validation utilities for the terminal layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt                                               │
//! │  ├── THIS MODULE: recognizers and range checks                         │
//! │  └── Bad input rejected before any statement is built                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Gateway                                                      │
//! │  └── Values reach the server as typed positional binds                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  └── NOT NULL / foreign key constraints                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{COORDINATE_MAX, COORDINATE_MIN};

// =============================================================================
// Recognizers
// =============================================================================

/// Checks whether the input parses as a signed integer.
///
/// Accepts only strings fully parseable as `i64`. Rejects empty and
/// malformed input. Never panics.
///
/// ## Example
/// ```rust
/// use emporium_core::validation::is_integer;
///
/// assert!(is_integer("42"));
/// assert!(is_integer("-7"));
/// assert!(!is_integer("abc"));
/// assert!(!is_integer(""));
/// assert!(!is_integer("4.2"));
/// ```
pub fn is_integer(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

/// Checks whether the input parses as a decimal number.
///
/// Accepts only strings fully parseable as `f64`. Rejects empty and
/// malformed input. Never panics.
///
/// ## Example
/// ```rust
/// use emporium_core::validation::is_decimal;
///
/// assert!(is_decimal("19.99"));
/// assert!(is_decimal("42"));
/// assert!(!is_decimal("abc"));
/// assert!(!is_decimal(""));
/// ```
pub fn is_decimal(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

// =============================================================================
// Typed Parsers
// =============================================================================

/// Parses an integer field, naming the field in the error.
pub fn parse_integer(field: &str, value: &str) -> ValidationResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parses a decimal field, naming the field in the error.
pub fn parse_decimal(field: &str, value: &str) -> ValidationResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotADecimal {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parses a strictly positive integer field (order units, restock amounts).
pub fn parse_positive_integer(field: &str, value: &str) -> ValidationResult<i32> {
    let parsed = parse_integer(field, value)?;
    if parsed <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(parsed)
}

/// Parses a coordinate component and checks the [0, 100] plane bounds.
pub fn parse_coordinate(field: &str, value: &str) -> ValidationResult<f64> {
    let parsed = parse_decimal(field, value)?;
    if !(COORDINATE_MIN..=COORDINATE_MAX).contains(&parsed) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: COORDINATE_MIN,
            max: COORDINATE_MAX,
        });
    }
    Ok(parsed)
}

/// Validates that a free-text field is non-empty after trimming.
///
/// Returns the trimmed value.
pub fn require_text(field: &str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("42"));
        assert!(is_integer("-17"));

        assert!(!is_integer(""));
        assert!(!is_integer("abc"));
        assert!(!is_integer("4.2"));
        assert!(!is_integer("1e3"));
        assert!(!is_integer("12 "));
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0"));
        assert!(is_decimal("19.99"));
        assert!(is_decimal("-3.5"));
        assert!(is_decimal("1e3"));

        assert!(!is_decimal(""));
        assert!(!is_decimal("abc"));
        assert!(!is_decimal("12,5"));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("store id", "7").unwrap(), 7);
        assert!(parse_integer("store id", "seven").is_err());
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("quantity", "3").unwrap(), 3);
        assert!(parse_positive_integer("quantity", "0").is_err());
        assert!(parse_positive_integer("quantity", "-2").is_err());
        assert!(parse_positive_integer("quantity", "abc").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("latitude", "10.0").unwrap(), 10.0);
        assert_eq!(parse_coordinate("latitude", "0").unwrap(), 0.0);
        assert_eq!(parse_coordinate("latitude", "100").unwrap(), 100.0);

        assert!(parse_coordinate("latitude", "-0.1").is_err());
        assert!(parse_coordinate("latitude", "100.1").is_err());
        assert!(parse_coordinate("latitude", "north").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("name", " alice ").unwrap(), "alice");
        assert!(require_text("name", "   ").is_err());
    }
}
