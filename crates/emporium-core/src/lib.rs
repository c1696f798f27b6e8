//! # emporium-core: Pure Domain Logic for Emporium
//!
//! This crate is the **heart** of the Emporium terminal client. It contains
//! the rules the interactive layer enforces, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Emporium Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (binary)                         │   │
//! │  │    menus ──► handlers ──► prompts ──► tabular output            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ emporium-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │    geo    │  │  session  │  │   │
//! │  │   │   Role    │  │ is_integer│  │ distance  │  │  Session  │  │   │
//! │  │   │           │  │ is_decimal│  │  radius   │  │AuthOutcome│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 emporium-db (Gateway)                           │   │
//! │  │           PostgreSQL connection, bound statements               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Role type and parsing
//! - [`validation`] - Numeric input recognizers and range checks
//! - [`geo`] - Planar distance between coordinate pairs
//! - [`session`] - Authenticated session and login outcome
//! - [`error`] - Typed validation errors

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod geo;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use geo::Coordinates;
pub use session::{AuthOutcome, Session};
pub use types::Role;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lower bound of the coordinate plane users and stores live on.
pub const COORDINATE_MIN: f64 = 0.0;

/// Upper bound of the coordinate plane users and stores live on.
pub const COORDINATE_MAX: f64 = 100.0;

/// How many rows the "recent" and "popular" listings return.
///
/// Applies to recent orders, recent product updates, popular products and
/// popular customers alike.
pub const TOP_ROWS: i64 = 5;
