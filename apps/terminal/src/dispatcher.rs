//! # Role-Gated Command Dispatcher
//!
//! The menu state machine.
//!
//! ## States and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌────────── choice = Create user (handler runs) ──┐          │
//! │            ▼                                                 │          │
//! │      ┌───────────┐ ── choice = Exit ──────────► ┌──────────────┐       │
//! │      │ LoggedOut │                              │  Terminated  │       │
//! │      └─────┬─────┘                              └──────────────┘       │
//! │            │ choice = Log in                                            │
//! │            ▼                                                            │
//! │      AuthOutcome?                                                       │
//! │        ├── InvalidCredentials ──► message, stay LoggedOut              │
//! │        └── Authenticated(session), by role:                            │
//! │              ├── CustomerMenu ──┐                                      │
//! │              ├── ManagerMenu  ──┼── loop on choice, Logout ──► back   │
//! │              └── AdminMenu    ──┘                  to LoggedOut        │
//! │                                                                         │
//! │  Unrecognized numeric choices print a message and re-prompt.           │
//! │  Non-numeric input is rejected by the console, never fatal.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{info, warn};

use emporium_core::{AuthOutcome, Role, Session};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::AppResult;
use crate::handlers::{admin, auth, customer, manager};

/// The dispatcher's current position in the menu graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    LoggedOut,
    CustomerMenu(Session),
    ManagerMenu(Session),
    AdminMenu(Session),
    Terminated,
}

/// The role menu an authenticated session lands in.
pub fn menu_for(session: Session) -> MenuState {
    match session.role {
        Role::Customer => MenuState::CustomerMenu(session),
        Role::Manager => MenuState::ManagerMenu(session),
        Role::Admin => MenuState::AdminMenu(session),
    }
}

/// Runs the menu loop until the user exits.
pub async fn run<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    greeting(console)?;

    let mut state = MenuState::LoggedOut;
    loop {
        state = match state {
            MenuState::LoggedOut => logged_out_menu(gateway, console).await?,
            MenuState::CustomerMenu(session) => customer_menu(gateway, console, session).await?,
            MenuState::ManagerMenu(session) => manager_menu(gateway, console, session).await?,
            MenuState::AdminMenu(session) => admin_menu(gateway, console, session).await?,
            MenuState::Terminated => break,
        };
    }
    Ok(())
}

fn greeting<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    console.say("")?;
    console.say("*******************************************************")?;
    console.say("                 Emporium User Interface               ")?;
    console.say("*******************************************************")?;
    console.say("")?;
    Ok(())
}

/// Prints a recoverable handler failure and keeps the menu alive.
///
/// Console failures propagate: with stdin gone there is no menu to
/// return to.
fn report<R: BufRead, W: Write, T>(
    console: &mut Console<R, W>,
    result: AppResult<T>,
) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            warn!(error = %err, "Handler failed");
            console.say(&err.to_string())?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

async fn logged_out_menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<MenuState> {
    console.say("MAIN MENU")?;
    console.say("---------")?;
    console.say("1. Create user")?;
    console.say("2. Log in")?;
    console.say("9. < EXIT")?;

    match console.read_choice()? {
        1 => {
            let result = auth::create_user(gateway, console).await;
            report(console, result)?;
            Ok(MenuState::LoggedOut)
        }
        2 => {
            let result = auth::log_in(gateway, console).await;
            match report(console, result)? {
                Some(AuthOutcome::Authenticated(session)) => {
                    info!(user_id = session.user_id, role = %session.role, "Logged in");
                    Ok(menu_for(session))
                }
                Some(AuthOutcome::InvalidCredentials) => {
                    console.say("Invalid name or password.")?;
                    Ok(MenuState::LoggedOut)
                }
                None => Ok(MenuState::LoggedOut),
            }
        }
        9 => Ok(MenuState::Terminated),
        _ => {
            console.say("Unrecognized choice!")?;
            Ok(MenuState::LoggedOut)
        }
    }
}

async fn customer_menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<MenuState> {
    console.say("CUSTOMER MENU")?;
    console.say("-------------")?;
    console.say("1. View stores within 30 units")?;
    console.say("2. View product list")?;
    console.say("3. Place an order")?;
    console.say("4. View 5 recent orders")?;
    console.say(".........................")?;
    console.say("9. Log out")?;

    let result = match console.read_choice()? {
        1 => customer::view_stores(gateway, console, session).await,
        2 => customer::view_products(gateway, console).await,
        3 => customer::place_order(gateway, console, session).await,
        4 => customer::view_recent_orders(gateway, console, session).await,
        9 => return Ok(MenuState::LoggedOut),
        _ => {
            console.say("Unrecognized choice!")?;
            return Ok(MenuState::CustomerMenu(session));
        }
    };
    report(console, result)?;
    Ok(MenuState::CustomerMenu(session))
}

async fn manager_menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<MenuState> {
    console.say("MANAGER MENU")?;
    console.say("------------")?;
    console.say("1. Update product")?;
    console.say("2. View 5 recent product updates")?;
    console.say("3. View 5 popular products")?;
    console.say("4. View 5 popular customers")?;
    console.say("5. Place product supply request to warehouse")?;
    console.say(".........................")?;
    console.say("9. Log out")?;

    let result = match console.read_choice()? {
        1 => manager::update_product(gateway, console, session).await,
        2 => manager::view_recent_updates(gateway, console, session).await,
        3 => manager::view_popular_products(gateway, console, session).await,
        4 => manager::view_popular_customers(gateway, console, session).await,
        5 => manager::place_supply_request(gateway, console, session).await,
        9 => return Ok(MenuState::LoggedOut),
        _ => {
            console.say("Unrecognized choice!")?;
            return Ok(MenuState::ManagerMenu(session));
        }
    };
    report(console, result)?;
    Ok(MenuState::ManagerMenu(session))
}

async fn admin_menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<MenuState> {
    console.say("ADMIN MENU")?;
    console.say("----------")?;
    console.say("1. Search user by user name")?;
    console.say("2. Update user")?;
    console.say("3. Update product")?;
    console.say(".........................")?;
    console.say("9. Log out")?;

    let result = match console.read_choice()? {
        1 => admin::search_user_by_name(gateway, console).await,
        2 => admin::update_user(gateway, console).await,
        // Admins may update any store's products; the ownership check
        // inside the handler only binds managers.
        3 => manager::update_product(gateway, console, session).await,
        9 => return Ok(MenuState::LoggedOut),
        _ => {
            console.say("Unrecognized choice!")?;
            return Ok(MenuState::AdminMenu(session));
        }
    };
    report(console, result)?;
    Ok(MenuState::AdminMenu(session))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_for_maps_roles() {
        let customer = Session::new(1, Role::Customer);
        let manager = Session::new(2, Role::Manager);
        let admin = Session::new(3, Role::Admin);

        assert_eq!(menu_for(customer), MenuState::CustomerMenu(customer));
        assert_eq!(menu_for(manager), MenuState::ManagerMenu(manager));
        assert_eq!(menu_for(admin), MenuState::AdminMenu(admin));
    }
}
