//! # Authentication & Registration
//!
//! Creates user records and resolves name/password pairs to a session.

use std::io::{BufRead, Write};

use emporium_core::{validation, AuthOutcome, Role, Session};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::handlers::{field, int_field};

/// Creates a new user record.
///
/// Coordinates must be numeric and within the [0, 100] plane. Every
/// self-registered account starts as a customer; there is no uniqueness
/// check on the name.
pub async fn create_user<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("\tEnter name: ")?;
    let password = console.prompt("\tEnter password: ")?;
    let latitude = console.prompt("\tEnter latitude: ")?;
    let longitude = console.prompt("\tEnter longitude: ")?;

    let latitude = validation::parse_coordinate("latitude", &latitude)?;
    let longitude = validation::parse_coordinate("longitude", &longitude)?;

    gateway
        .execute_update(
            sqlx::query(
                "INSERT INTO users (name, password, latitude, longitude, type)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&name)
            .bind(&password)
            .bind(latitude)
            .bind(longitude)
            .bind(Role::Customer.as_str()),
        )
        .await?;

    console.say("User successfully created!")?;
    Ok(())
}

/// Checks login credentials for an existing user.
///
/// Exact match on both name and password. Zero matching rows is a normal
/// outcome, not an error: the dispatcher prints a message and stays on
/// the logged-out menu.
pub async fn log_in<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<AuthOutcome> {
    let name = console.prompt("\tEnter name: ")?;
    let password = console.prompt("\tEnter password: ")?;

    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT userid, type FROM users WHERE name = $1 AND password = $2")
                .bind(&name)
                .bind(&password),
        )
        .await?;

    let Some(row) = rows.first() else {
        return Ok(AuthOutcome::InvalidCredentials);
    };

    let user_id = int_field(row, 0)?;
    let role_text = field(row, 1)?;
    let role = Role::parse(role_text)
        .ok_or_else(|| AppError::Data(format!("unknown role '{}'", role_text.trim())))?;

    Ok(AuthOutcome::Authenticated(Session::new(user_id, role)))
}
