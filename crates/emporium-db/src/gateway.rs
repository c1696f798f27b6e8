//! # Gateway
//!
//! Connection lifecycle and statement primitives.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Gateway Lifecycle                               │
//! │                                                                         │
//! │  Startup                                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Gateway::connect(config) ── failure is fatal, caller exits            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  One PgConnection, methods take &mut self                              │
//! │  (one interactive session, one in-flight statement, no pool)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Gateway::close(self) ── consumes the gateway, best-effort             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement arrives with its parameters already bound (`$n`
//! positions); the gateway never sees raw user input spliced into SQL.

use std::io::Write;

use sqlx::postgres::{PgArguments, PgConnectOptions, PgConnection};
use sqlx::{Column, Connection, Postgres, Row};
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::{DbError, DbResult};
use crate::text::column_text;

/// A statement with its positional parameters bound.
///
/// Handlers build these with `sqlx::query("...").bind(..)` and hand them
/// to the gateway to run.
pub type BoundQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// The sole component issuing statements to the relational server.
///
/// Owns exactly one network connection for the lifetime of the process.
/// Each call is its own unit of work at the server's default autocommit
/// behavior; there is no transaction spanning calls.
#[derive(Debug)]
pub struct Gateway {
    conn: PgConnection,
}

impl Gateway {
    /// Establishes the single server connection.
    ///
    /// ## Returns
    /// * `Ok(Gateway)` - Ready-to-use gateway
    /// * `Err(DbError::ConnectionFailed)` - Server unreachable or refused;
    ///   the caller treats this as a fatal startup error
    pub async fn connect(config: &GatewayConfig) -> DbResult<Self> {
        info!(url = %config.url(), "Connecting to database");
        Self::connect_with(config.connect_options()).await
    }

    /// Establishes a connection from prepared options.
    pub async fn connect_with(options: PgConnectOptions) -> DbResult<Self> {
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Database connection established");
        Ok(Gateway { conn })
    }

    /// Executes a non-returning statement (INSERT / UPDATE / DELETE / DDL).
    pub async fn execute_update(&mut self, query: BoundQuery<'_>) -> DbResult<()> {
        let result = query.execute(&mut self.conn).await?;
        debug!(rows_affected = result.rows_affected(), "Update executed");
        Ok(())
    }

    /// Executes a SELECT and returns only the number of rows it produced.
    pub async fn execute_query(&mut self, query: BoundQuery<'_>) -> DbResult<u64> {
        let rows = query.fetch_all(&mut self.conn).await?;
        Ok(rows.len() as u64)
    }

    /// Executes a SELECT and materializes every row as text values.
    ///
    /// Column order matches the statement's projection order. NULL columns
    /// materialize as `None`.
    pub async fn execute_query_and_return_result(
        &mut self,
        query: BoundQuery<'_>,
    ) -> DbResult<Vec<Vec<Option<String>>>> {
        let rows = query.fetch_all(&mut self.conn).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut record = Vec::with_capacity(row.len());
            for index in 0..row.len() {
                record.push(column_text(row, index)?);
            }
            result.push(record);
        }
        Ok(result)
    }

    /// Executes a SELECT and writes the result to `out`.
    ///
    /// ## Output Format
    /// A tab-separated header row (column names), then one tab-separated
    /// line per row. The header prints once, and only when at least one
    /// row exists. NULLs print as `null`.
    ///
    /// ## Returns
    /// The number of rows written.
    pub async fn execute_query_and_print_result<W: Write>(
        &mut self,
        query: BoundQuery<'_>,
        out: &mut W,
    ) -> DbResult<u64> {
        let rows = query.fetch_all(&mut self.conn).await?;

        let mut header_written = false;
        for row in &rows {
            if !header_written {
                let names: Vec<&str> = row.columns().iter().map(|c| c.name()).collect();
                writeln!(out, "{}", names.join("\t")).map_err(output_error)?;
                header_written = true;
            }

            let mut values = Vec::with_capacity(row.len());
            for index in 0..row.len() {
                values.push(column_text(row, index)?.unwrap_or_else(|| "null".to_string()));
            }
            writeln!(out, "{}", values.join("\t")).map_err(output_error)?;
        }

        Ok(rows.len() as u64)
    }

    /// Fetches the most recently generated value of a named sequence in
    /// this session.
    ///
    /// Used to read back server-assigned identifiers right after an
    /// insert. Returns `-1` when the server produces no row.
    pub async fn current_sequence_value(&mut self, sequence: &str) -> DbResult<i64> {
        let row = sqlx::query("SELECT currval($1::regclass)")
            .bind(sequence)
            .fetch_optional(&mut self.conn)
            .await?;

        match row {
            Some(row) => Ok(row.try_get::<i64, _>(0)?),
            None => Ok(-1),
        }
    }

    /// Releases the connection.
    ///
    /// Best-effort cleanup: errors are logged and swallowed. Consuming
    /// `self` makes a second close unrepresentable.
    pub async fn close(self) {
        if let Err(e) = self.conn.close().await {
            debug!(error = %e, "Error while closing connection, ignored");
        }
    }
}

fn output_error(err: std::io::Error) -> DbError {
    DbError::Internal(format!("writing query result: {err}"))
}
