//! # Customer Handlers
//!
//! Nearby-store search, catalog listing, order placement, order history.

use std::io::{BufRead, Write};

use emporium_core::geo::NEARBY_RADIUS;
use emporium_core::{validation, Coordinates, Session, TOP_ROWS};
use emporium_db::Gateway;

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::handlers::{field, float_field, int_field, prompt_store_id};

/// Lists the stores within [`NEARBY_RADIUS`] units of the customer.
///
/// Distance is computed client-side with the planar helper; the listing
/// carries the store's coordinates, establishment date and distance.
pub async fn view_stores<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let origin = user_coordinates(gateway, session.user_id).await?;

    let rows = gateway
        .execute_query_and_return_result(sqlx::query(
            "SELECT storeid, latitude, longitude, dateestablished FROM store ORDER BY storeid",
        ))
        .await?;

    let mut header_written = false;
    for row in &rows {
        let store = Coordinates::new(float_field(row, 1)?, float_field(row, 2)?);
        let distance = origin.distance_to(store);
        if distance > NEARBY_RADIUS {
            continue;
        }

        if !header_written {
            console.say("storeid\tlatitude\tlongitude\tdateestablished\tdistance")?;
            header_written = true;
        }
        let established = row
            .get(3)
            .and_then(|value| value.as_deref())
            .unwrap_or("null");
        console.say(&format!(
            "{}\t{}\t{}\t{}\t{:.2}",
            field(row, 0)?,
            field(row, 1)?,
            field(row, 2)?,
            established,
            distance
        ))?;
    }

    if !header_written {
        console.say("No stores within 30 units of your location.")?;
    }
    Ok(())
}

/// Prints the product catalog of a store.
pub async fn view_products<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;

    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT productname, priceperunit, numberofunits
                 FROM product WHERE storeid = $1
                 ORDER BY productname",
            )
            .bind(store_id),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("This store has no products.")?;
    }
    Ok(())
}

/// Places an order: insert the order row, decrement stock, report the
/// server-assigned order number.
///
/// The store must be within ordering range of the customer and the
/// product must have sufficient stock.
pub async fn place_order<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let store_id = prompt_store_id(gateway, console).await?;

    let origin = user_coordinates(gateway, session.user_id).await?;
    let store = store_coordinates(gateway, store_id).await?;
    if !origin.is_near(store) {
        console.say("That store is more than 30 units away. Pick a closer one.")?;
        return Ok(());
    }

    let product_name = console.prompt("\tEnter product name: ")?;
    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT numberofunits FROM product WHERE storeid = $1 AND productname = $2")
                .bind(store_id)
                .bind(&product_name),
        )
        .await?;
    let Some(row) = rows.first() else {
        console.say("Product does not exist in the store.")?;
        return Ok(());
    };
    let in_stock = int_field(row, 0)?;

    let units = console.prompt("\tEnter number of units: ")?;
    let units = validation::parse_positive_integer("units", &units)?;
    if units > in_stock {
        console.say(&format!("Not enough stock: {in_stock} units available."))?;
        return Ok(());
    }

    gateway
        .execute_update(
            sqlx::query(
                "INSERT INTO orders (customerid, storeid, productname, unitsordered, ordertime)
                 VALUES ($1, $2, $3, $4, now())",
            )
            .bind(session.user_id)
            .bind(store_id)
            .bind(&product_name)
            .bind(units),
        )
        .await?;

    gateway
        .execute_update(
            sqlx::query(
                "UPDATE product SET numberofunits = numberofunits - $1
                 WHERE storeid = $2 AND productname = $3",
            )
            .bind(units)
            .bind(store_id)
            .bind(&product_name),
        )
        .await?;

    // The order number was assigned by the orders sequence in this session.
    let order_number = gateway
        .current_sequence_value("orders_ordernumber_seq")
        .await?;
    if order_number >= 0 {
        console.say(&format!("Order {order_number} successfully placed!"))?;
    } else {
        console.say("Order successfully placed!")?;
    }
    Ok(())
}

/// Prints the customer's 5 most recent orders, newest first.
pub async fn view_recent_orders<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: Session,
) -> AppResult<()> {
    let printed = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT ordernumber, storeid, productname, unitsordered, ordertime
                 FROM orders WHERE customerid = $1
                 ORDER BY ordertime DESC
                 LIMIT $2",
            )
            .bind(session.user_id)
            .bind(TOP_ROWS),
            console.out(),
        )
        .await?;

    if printed == 0 {
        console.say("No orders yet.")?;
    }
    Ok(())
}

async fn user_coordinates(gateway: &mut Gateway, user_id: i32) -> AppResult<Coordinates> {
    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT latitude, longitude FROM users WHERE userid = $1").bind(user_id),
        )
        .await?;
    let row = rows
        .first()
        .ok_or_else(|| AppError::Data(format!("no users row for id {user_id}")))?;
    Ok(Coordinates::new(float_field(row, 0)?, float_field(row, 1)?))
}

async fn store_coordinates(gateway: &mut Gateway, store_id: i32) -> AppResult<Coordinates> {
    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT latitude, longitude FROM store WHERE storeid = $1").bind(store_id),
        )
        .await?;
    let row = rows
        .first()
        .ok_or_else(|| AppError::Data(format!("no store row for id {store_id}")))?;
    Ok(Coordinates::new(float_field(row, 0)?, float_field(row, 1)?))
}
