//! # Session Module
//!
//! The authenticated session and the outcome of a login attempt.
//!
//! ## Design
//! The session is an explicit value returned by authentication and passed
//! into every handler, not a shared mutable field. A failed login is a
//! normal outcome variant, so the dispatcher branches instead of assuming
//! a role always exists.

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// The currently authenticated principal.
///
/// Held for the duration of one role-menu loop; replaced wholesale on the
/// next successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned user identifier.
    pub user_id: i32,
    /// Role resolved at login time; decides the menu and write permissions.
    pub role: Role,
}

impl Session {
    pub fn new(user_id: i32, role: Role) -> Self {
        Session { user_id, role }
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Name and password matched a user row.
    Authenticated(Session),
    /// No row matched; the caller re-prompts, nothing else changes.
    InvalidCredentials,
}

impl AuthOutcome {
    /// The session, if authentication succeeded.
    pub fn session(&self) -> Option<Session> {
        match self {
            AuthOutcome::Authenticated(session) => Some(*session),
            AuthOutcome::InvalidCredentials => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_session() {
        let session = Session::new(12, Role::Manager);
        assert_eq!(
            AuthOutcome::Authenticated(session).session(),
            Some(session)
        );
        assert_eq!(AuthOutcome::InvalidCredentials.session(), None);
    }
}
