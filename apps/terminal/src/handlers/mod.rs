//! # Domain Command Handlers
//!
//! One function per menu action. Every handler follows the same shape:
//! read and validate console input, issue bound statements through the
//! gateway, print or summarize the result, return to the calling menu.
//!
//! Store-scoped actions share two steps:
//! 1. [`prompt_store_id`] re-prompts until the input is an integer naming
//!    an existing store.
//! 2. [`authorize_store_action`] checks the session user manages that
//!    store. Admins bypass the ownership check; the check runs per
//!    action and is never cached.

pub mod admin;
pub mod auth;
pub mod customer;
pub mod manager;

use std::io::{BufRead, Write};

use emporium_core::{validation, Role, Session};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::{AppError, AppResult};

// =============================================================================
// Row Field Access
// =============================================================================
// The gateway materializes rows as text values. These helpers convert one
// column back to the type a handler needs, naming the column on failure.

pub(crate) fn field(row: &[Option<String>], index: usize) -> AppResult<&str> {
    row.get(index)
        .and_then(|value| value.as_deref())
        .ok_or_else(|| AppError::Data(format!("column {index} is missing or null")))
}

pub(crate) fn int_field(row: &[Option<String>], index: usize) -> AppResult<i32> {
    let text = field(row, index)?;
    text.trim()
        .parse()
        .map_err(|_| AppError::Data(format!("column {index} is not an integer: '{text}'")))
}

pub(crate) fn float_field(row: &[Option<String>], index: usize) -> AppResult<f64> {
    let text = field(row, index)?;
    text.trim()
        .parse()
        .map_err(|_| AppError::Data(format!("column {index} is not numeric: '{text}'")))
}

// =============================================================================
// Shared Store Steps
// =============================================================================

/// Prompts for a store id until it is a valid integer naming an existing
/// store.
pub(crate) async fn prompt_store_id<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<i32> {
    loop {
        let input = console.prompt("\tEnter store id: ")?;
        let trimmed = input.trim();
        if !validation::is_integer(trimmed) {
            console.say("Invalid input. Try again!")?;
            continue;
        }
        let Ok(store_id) = trimmed.parse::<i32>() else {
            console.say("Invalid input. Try again!")?;
            continue;
        };

        let found = gateway
            .execute_query(sqlx::query("SELECT * FROM store WHERE storeid = $1").bind(store_id))
            .await?;
        if found == 0 {
            console.say("Store does not exist. Try again!")?;
            continue;
        }
        return Ok(store_id);
    }
}

/// Whether the session may run a store-scoped write against `store_id`.
///
/// Managers must be the store's manager of record; admins always may.
pub(crate) async fn authorize_store_action(
    gateway: &mut Gateway,
    session: Session,
    store_id: i32,
) -> AppResult<bool> {
    if session.role == Role::Admin {
        return Ok(true);
    }

    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT managerid FROM store WHERE storeid = $1").bind(store_id),
        )
        .await?;
    let Some(row) = rows.first() else {
        return Ok(false);
    };
    Ok(int_field(row, 0)? == session.user_id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_field_rejects_missing_and_null() {
        let r = row(&[Some("7"), None]);
        assert_eq!(field(&r, 0).unwrap(), "7");
        assert!(field(&r, 1).is_err());
        assert!(field(&r, 2).is_err());
    }

    #[test]
    fn test_int_field_trims_padding() {
        let r = row(&[Some(" 42 ")]);
        assert_eq!(int_field(&r, 0).unwrap(), 42);
    }

    #[test]
    fn test_int_field_rejects_text() {
        let r = row(&[Some("forty-two")]);
        assert!(int_field(&r, 0).is_err());
    }

    #[test]
    fn test_float_field_parses_decimal_text() {
        // NUMERIC columns materialize with their full scale
        let r = row(&[Some("10.000000")]);
        assert_eq!(float_field(&r, 0).unwrap(), 10.0);
    }
}
