//! # Admin Handlers
//!
//! User record search and maintenance.

use std::io::{BufRead, Write};

use emporium_core::{validation, Role};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::AppResult;

/// Exact-match lookup by user name; prints all matches.
pub async fn search_user_by_name<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("\tEnter user name: ")?;

    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query("SELECT * FROM users WHERE name = $1").bind(&name),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("User does not exist.")?;
    }
    Ok(())
}

/// Overwrites a user row.
///
/// Prompts for every field unconditionally (no partial update) plus a
/// numbered role selection.
pub async fn update_user<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id_input = console.prompt("\tEnter user id: ")?;
    let user_id = validation::parse_integer("user id", &id_input)?;

    let found = gateway
        .execute_query(sqlx::query("SELECT * FROM users WHERE userid = $1").bind(user_id))
        .await?;
    if found == 0 {
        console.say("User does not exist.")?;
        return Ok(());
    }

    let name = console.prompt("\tEnter new name: ")?;
    let password = console.prompt("\tEnter new password: ")?;
    let latitude = console.prompt("\tEnter new latitude: ")?;
    let longitude = console.prompt("\tEnter new longitude: ")?;

    let latitude = validation::parse_coordinate("latitude", &latitude)?;
    let longitude = validation::parse_coordinate("longitude", &longitude)?;

    console.say("Choose user type:")?;
    console.say("1. Customer")?;
    console.say("2. Manager")?;
    console.say("3. Admin")?;
    let role = match console.read_choice()? {
        1 => Role::Customer,
        2 => Role::Manager,
        3 => Role::Admin,
        _ => {
            console.say("Unrecognized choice!")?;
            return Ok(());
        }
    };

    gateway
        .execute_update(
            sqlx::query(
                "UPDATE users
                 SET name = $1, password = $2, latitude = $3, longitude = $4, type = $5
                 WHERE userid = $6",
            )
            .bind(&name)
            .bind(&password)
            .bind(latitude)
            .bind(longitude)
            .bind(role.as_str())
            .bind(user_id),
        )
        .await?;

    console.say("User successfully updated!")?;
    Ok(())
}
