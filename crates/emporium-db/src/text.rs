//! # Column Text Coercion
//!
//! Turns one column of a result row into its text form, whatever the
//! projection selected.
//!
//! The gateway's materialize and print primitives accept arbitrary SELECT
//! statements, so the column types are only known at runtime. This module
//! maps each PostgreSQL type it can meet in the schema to the matching
//! Rust decode, then formats the value.

use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{Row, TypeInfo, ValueRef};

use crate::error::{DbError, DbResult};

/// Decodes one column as text.
///
/// ## Type Mapping
/// ```text
/// INT2 / INT4 / INT8        → i16 / i32 / i64
/// FLOAT4 / FLOAT8           → f32 / f64
/// NUMERIC                   → rust_decimal::Decimal
/// BOOL                      → bool
/// DATE / TIME               → chrono::NaiveDate / NaiveTime
/// TIMESTAMP / TIMESTAMPTZ   → chrono::NaiveDateTime / DateTime<Utc>
/// everything else           → String (TEXT, VARCHAR, BPCHAR, NAME, ...)
/// ```
///
/// SQL NULL returns `Ok(None)`. A type sqlx cannot decode as any of the
/// above surfaces as [`DbError::Decode`] naming the column.
pub fn column_text(row: &PgRow, index: usize) -> DbResult<Option<String>> {
    let raw = row.try_get_raw(index).map_err(DbError::from)?;
    if raw.is_null() {
        return Ok(None);
    }
    let type_name = raw.type_info().name().to_string();

    let text = match type_name.as_str() {
        "INT2" => row.try_get::<i16, _>(index)?.to_string(),
        "INT4" => row.try_get::<i32, _>(index)?.to_string(),
        "INT8" => row.try_get::<i64, _>(index)?.to_string(),
        "FLOAT4" => row.try_get::<f32, _>(index)?.to_string(),
        "FLOAT8" => row.try_get::<f64, _>(index)?.to_string(),
        "NUMERIC" => row.try_get::<Decimal, _>(index)?.to_string(),
        "BOOL" => row.try_get::<bool, _>(index)?.to_string(),
        "DATE" => row.try_get::<chrono::NaiveDate, _>(index)?.to_string(),
        "TIME" => row.try_get::<chrono::NaiveTime, _>(index)?.to_string(),
        "TIMESTAMP" => row.try_get::<chrono::NaiveDateTime, _>(index)?.to_string(),
        "TIMESTAMPTZ" => row
            .try_get::<chrono::DateTime<chrono::Utc>, _>(index)?
            .to_string(),
        _ => row.try_get::<String, _>(index)?,
    };

    Ok(Some(text))
}
