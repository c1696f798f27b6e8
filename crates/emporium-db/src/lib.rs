//! # emporium-db: Database Gateway for Emporium
//!
//! This crate provides database access for the Emporium terminal client.
//! It owns one PostgreSQL connection and exposes the statement primitives
//! everything else is built from.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Emporium Data Flow                                │
//! │                                                                         │
//! │  Command handler (place_order, update_product, ...)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   emporium-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Gateway    │    │  Text Coerce  │    │    Config    │  │   │
//! │  │   │ (gateway.rs)  │    │  (text.rs)    │    │ (config.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ execute_*     │◄───│ column_text   │    │ host, port   │  │   │
//! │  │   │ currval       │    │ per-type map  │    │ db, user, pw │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL server at <host>:<port>/<database>                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`gateway`] - Connection lifecycle and statement primitives
//! - [`config`] - Connection parameters
//! - [`text`] - Column value coercion to text
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use emporium_db::{Gateway, GatewayConfig};
//!
//! let config = GatewayConfig::new("emporium", 5432, "postgres");
//! let mut gateway = Gateway::connect(&config).await?;
//!
//! let query = sqlx::query("SELECT * FROM store WHERE storeid = $1").bind(5);
//! let rows = gateway.execute_query(query).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod gateway;
pub mod text;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::GatewayConfig;
pub use error::{DbError, DbResult};
pub use gateway::{BoundQuery, Gateway};
