//! # Domain Types
//!
//! Core types shared by the gateway and the terminal layer.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Role
// =============================================================================

/// The role of an authenticated user.
///
/// The role determines which menu the dispatcher shows and which write
/// operations a handler permits.
///
/// ## Database Representation
/// Stored in the `type` column of `users` as a blank-padded `char` value,
/// so [`Role::parse`] trims surrounding whitespace before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Browses nearby stores, places orders.
    Customer,
    /// Maintains the catalog of the stores they manage.
    Manager,
    /// Manages user records; store-ownership checks do not apply.
    Admin,
}

impl Role {
    /// Parses a role from its database representation.
    ///
    /// Trims blank padding and matches case-insensitively, mirroring how
    /// the `type` column compares. Returns `None` for unknown roles.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "manager" => Some(Role::Manager),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The canonical database spelling of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        assert_eq!(Role::parse("Customer"), Some(Role::Customer));
        assert_eq!(Role::parse("Manager"), Some(Role::Manager));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    }

    #[test]
    fn test_parse_trims_char_padding() {
        // char(20) columns come back blank-padded
        assert_eq!(Role::parse("Customer            "), Some(Role::Customer));
        assert_eq!(Role::parse("  admin "), Some(Role::Admin));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Supervisor"), None);
    }

    #[test]
    fn test_round_trip() {
        for role in [Role::Customer, Role::Manager, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
