//! # Manager Handlers
//!
//! Catalog maintenance and store reporting, all gated on store ownership.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use emporium_core::{validation, Session, ValidationError, TOP_ROWS};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::AppResult;
use crate::handlers::{authorize_store_action, prompt_store_id};

/// Updates a product's price and quantity, and appends an audit row.
///
/// Also reachable from the admin menu; the ownership check inside
/// [`authorize_store_action`] only binds managers.
pub async fn update_product<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;
    if !authorize_store_action(gateway, session, store_id).await? {
        console.say("You are not the manager of this store.")?;
        return Ok(());
    }

    let product_name = console.prompt("\tEnter product name: ")?;
    let found = gateway
        .execute_query(
            sqlx::query("SELECT * FROM product WHERE storeid = $1 AND productname = $2")
                .bind(store_id)
                .bind(&product_name),
        )
        .await?;
    if found == 0 {
        console.say("Product does not exist in the store.")?;
        return Ok(());
    }

    let price_input = console.prompt("\tEnter new price: ")?;
    let price = parse_price(&price_input)?;

    let quantity_input = console.prompt("\tEnter new quantity: ")?;
    let quantity = validation::parse_integer("quantity", &quantity_input)?;

    gateway
        .execute_update(
            sqlx::query(
                "UPDATE product SET priceperunit = $1, numberofunits = $2
                 WHERE storeid = $3 AND productname = $4",
            )
            .bind(price)
            .bind(quantity)
            .bind(store_id)
            .bind(&product_name),
        )
        .await?;
    console.say("Product successfully updated!")?;

    // Audit trail: who touched which product, stamped with the server date.
    gateway
        .execute_update(
            sqlx::query(
                "INSERT INTO productupdates (managerid, storeid, productname, updatedon)
                 VALUES ($1, $2, $3, CURRENT_DATE)",
            )
            .bind(session.user_id)
            .bind(store_id)
            .bind(&product_name),
        )
        .await?;

    Ok(())
}

/// Prints the 5 most recent product updates for the store, newest first.
pub async fn view_recent_updates<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;
    if !authorize_store_action(gateway, session, store_id).await? {
        console.say("You are not the manager of this store.")?;
        return Ok(());
    }

    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT * FROM productupdates WHERE storeid = $1
                 ORDER BY updatedon DESC
                 LIMIT $2",
            )
            .bind(store_id)
            .bind(TOP_ROWS),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("No product updates for this store yet.")?;
    }
    Ok(())
}

/// Prints the store's top 5 products by total units ordered, descending.
pub async fn view_popular_products<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;
    if !authorize_store_action(gateway, session, store_id).await? {
        console.say("You are not the manager of this store.")?;
        return Ok(());
    }

    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT productname, SUM(unitsordered) AS total_units_sold
                 FROM orders WHERE storeid = $1
                 GROUP BY productname
                 ORDER BY total_units_sold DESC
                 LIMIT $2",
            )
            .bind(store_id)
            .bind(TOP_ROWS),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("No orders for this store yet.")?;
    }
    Ok(())
}

/// Prints the store's top 5 customers by order count, descending.
pub async fn view_popular_customers<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;
    if !authorize_store_action(gateway, session, store_id).await? {
        console.say("You are not the manager of this store.")?;
        return Ok(());
    }

    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT customerid, COUNT(*) AS total_orders
                 FROM orders WHERE storeid = $1
                 GROUP BY customerid
                 ORDER BY total_orders DESC
                 LIMIT $2",
            )
            .bind(store_id)
            .bind(TOP_ROWS),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("No orders for this store yet.")?;
    }
    Ok(())
}

/// Records a restock request to a warehouse and bumps the stock count.
///
/// The quantity lands on the product immediately; there is no
/// fulfillment tracking.
pub async fn place_supply_request<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;
    if !authorize_store_action(gateway, session, store_id).await? {
        console.say("You are not the manager of this store.")?;
        return Ok(());
    }

    let product_name = console.prompt("\tEnter product name: ")?;
    let found = gateway
        .execute_query(
            sqlx::query("SELECT * FROM product WHERE storeid = $1 AND productname = $2")
                .bind(store_id)
                .bind(&product_name),
        )
        .await?;
    if found == 0 {
        console.say("Product does not exist in the store.")?;
        return Ok(());
    }

    let quantity_input = console.prompt("\tEnter quantity: ")?;
    let quantity = validation::parse_integer("quantity", &quantity_input)?;

    let warehouse_input = console.prompt("\tEnter warehouse id: ")?;
    let warehouse_id = validation::parse_integer("warehouse id", &warehouse_input)?;

    let warehouses = gateway
        .execute_query(
            sqlx::query("SELECT * FROM warehouse WHERE warehouseid = $1").bind(warehouse_id),
        )
        .await?;
    if warehouses == 0 {
        console.say("Warehouse does not exist. Try again!")?;
        return Ok(());
    }

    gateway
        .execute_update(
            sqlx::query(
                "INSERT INTO productsupplyrequests
                     (managerid, storeid, productname, unitsrequested, warehouseid)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(session.user_id)
            .bind(store_id)
            .bind(&product_name)
            .bind(quantity)
            .bind(warehouse_id),
        )
        .await?;
    console.say("Product supply request successfully placed!")?;

    gateway
        .execute_update(
            sqlx::query(
                "UPDATE product SET numberofunits = numberofunits + $1
                 WHERE storeid = $2 AND productname = $3",
            )
            .bind(quantity)
            .bind(store_id)
            .bind(&product_name),
        )
        .await?;

    Ok(())
}

/// Parses a price entry as an exact decimal.
fn parse_price(value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if !validation::is_decimal(trimmed) {
        return Err(ValidationError::NotADecimal {
            field: "price".to_string(),
            value: value.to_string(),
        });
    }
    trimmed.parse().map_err(|_| ValidationError::NotADecimal {
        field: "price".to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_price(" 5 ").unwrap(), Decimal::new(5, 0));

        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
    }
}
