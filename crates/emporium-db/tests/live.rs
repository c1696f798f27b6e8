//! Gateway integration tests against a live PostgreSQL server.
//!
//! The server is an external collaborator, so these are ignored by
//! default. Point `DATABASE_URL` at any reachable PostgreSQL and run:
//!
//! ```text
//! DATABASE_URL=postgres://postgres@localhost:5432/postgres \
//!     cargo test -p emporium-db -- --ignored
//! ```
//!
//! Every test works in session-local temporary tables, so no permanent
//! schema is required or touched.

use sqlx::postgres::PgConnectOptions;

use emporium_db::Gateway;

async fn connect() -> Gateway {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a PostgreSQL server for ignored tests");
    let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
    Gateway::connect_with(options)
        .await
        .expect("failed to connect")
}

async fn create_users_table(gateway: &mut Gateway) {
    gateway
        .execute_update(sqlx::query(
            "CREATE TEMP TABLE users (
                userid serial NOT NULL,
                name varchar(50) NOT NULL,
                password varchar(11) NOT NULL,
                latitude decimal(8,6) NOT NULL,
                longitude decimal(9,6) NOT NULL,
                type char(20) NOT NULL)",
        ))
        .await
        .expect("create temp users");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server (set DATABASE_URL)"]
async fn register_then_login_resolves_customer_role() {
    let mut gateway = connect().await;
    create_users_table(&mut gateway).await;

    gateway
        .execute_update(
            sqlx::query(
                "INSERT INTO users (name, password, latitude, longitude, type)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind("alice")
            .bind("pw123")
            .bind(10.0_f64)
            .bind(20.0_f64)
            .bind("Customer"),
        )
        .await
        .expect("insert user");

    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query("SELECT userid, type FROM users WHERE name = $1 AND password = $2")
                .bind("alice")
                .bind("pw123"),
        )
        .await
        .expect("login query");

    assert_eq!(rows.len(), 1);
    let user_id = rows[0][0].as_deref().expect("userid is not null");
    assert!(user_id.parse::<i32>().is_ok());
    // char(20) comes back blank-padded
    assert_eq!(rows[0][1].as_deref().map(str::trim), Some("Customer"));

    gateway.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server (set DATABASE_URL)"]
async fn row_count_is_idempotent_on_unchanged_data() {
    let mut gateway = connect().await;
    create_users_table(&mut gateway).await;

    for name in ["a", "b", "c"] {
        gateway
            .execute_update(
                sqlx::query(
                    "INSERT INTO users (name, password, latitude, longitude, type)
                     VALUES ($1, 'pw', 1.0, 1.0, 'Customer')",
                )
                .bind(name),
            )
            .await
            .expect("insert user");
    }

    let first = gateway
        .execute_query(sqlx::query("SELECT * FROM users"))
        .await
        .expect("first count");
    let second = gateway
        .execute_query(sqlx::query("SELECT * FROM users"))
        .await
        .expect("second count");

    assert_eq!(first, 3);
    assert_eq!(first, second);

    gateway.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server (set DATABASE_URL)"]
async fn popular_products_come_back_descending() {
    let mut gateway = connect().await;
    gateway
        .execute_update(sqlx::query(
            "CREATE TEMP TABLE orders (
                ordernumber serial NOT NULL,
                customerid integer NOT NULL,
                storeid integer NOT NULL,
                productname varchar(30) NOT NULL,
                unitsordered integer NOT NULL,
                ordertime timestamp NOT NULL DEFAULT now())",
        ))
        .await
        .expect("create temp orders");

    // three products, total units 50 / 30 / 10
    let seed = [
        ("beans", 20),
        ("beans", 30),
        ("rice", 30),
        ("salt", 10),
    ];
    for (product, units) in seed {
        gateway
            .execute_update(
                sqlx::query(
                    "INSERT INTO orders (customerid, storeid, productname, unitsordered)
                     VALUES (1, 5, $1, $2)",
                )
                .bind(product)
                .bind(units),
            )
            .await
            .expect("insert order");
    }

    let rows = gateway
        .execute_query_and_return_result(
            sqlx::query(
                "SELECT productname, SUM(unitsordered) AS total_units_sold
                 FROM orders WHERE storeid = $1
                 GROUP BY productname
                 ORDER BY total_units_sold DESC
                 LIMIT 5",
            )
            .bind(5),
        )
        .await
        .expect("popular products query");

    let totals: Vec<i64> = rows
        .iter()
        .map(|row| row[1].as_deref().expect("sum is not null").parse().unwrap())
        .collect();
    assert_eq!(totals, vec![50, 30, 10]);

    gateway.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server (set DATABASE_URL)"]
async fn sequence_value_tracks_last_assignment() {
    let mut gateway = connect().await;
    gateway
        .execute_update(sqlx::query("CREATE TEMP SEQUENCE order_seq"))
        .await
        .expect("create temp sequence");

    let rows = gateway
        .execute_query_and_return_result(sqlx::query("SELECT nextval('order_seq')"))
        .await
        .expect("nextval");
    let assigned: i64 = rows[0][0].as_deref().unwrap().parse().unwrap();

    let current = gateway
        .current_sequence_value("order_seq")
        .await
        .expect("currval");
    assert_eq!(current, assigned);

    gateway.close().await;
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server (set DATABASE_URL)"]
async fn print_result_is_tab_separated_with_single_header() {
    let mut gateway = connect().await;

    let mut out = Vec::new();
    let count = gateway
        .execute_query_and_print_result(
            sqlx::query(
                "SELECT v AS storeid, NULL::text AS note
                 FROM (VALUES (1), (2)) AS t(v)",
            ),
            &mut out,
        )
        .await
        .expect("print query");

    assert_eq!(count, 2);
    let printed = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines, vec!["storeid\tnote", "1\tnull", "2\tnull"]);

    gateway.close().await;
}
