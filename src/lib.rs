//! # Quarry — visual query builder core
//!
//! Quarry is the engine behind a drag-and-drop query builder: the UI edits a
//! structured [`QueryConfig`], Quarry renders it into SQL text on every change
//! and screens that text before anything is sent to a database.
//!
//! ## Quick Example
//!
//! ```
//! use quarry::prelude::*;
//!
//! let config = QueryConfig::new()
//!     .table("public", "users")
//!     .column("public", "users", "id")
//!     .column("public", "users", "email")
//!     .filter("public.users.status", Operator::Eq, "active");
//!
//! let sql = generator::render(&config);
//! assert!(sql.starts_with("SELECT"));
//! assert!(validator::validate(&sql).is_ok());
//! ```
//!
//! The generator is a pure, stateless transform: the same configuration always
//! renders to the same text, and a half-built configuration renders to
//! best-effort text rather than an error. The validator is a structural screen
//! (read-only leading keyword, FROM presence, parenthesis balance, mutation
//! denylist), not a security boundary — pair it with a read-only database
//! credential.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod validator;

/// Ergonomic alias for the root configuration aggregate.
pub type QueryConfig = config::QueryConfig;

pub mod prelude {
    pub use crate::QueryConfig;
    pub use crate::config::*;
    pub use crate::engine::{Database, ResultSet};
    pub use crate::error::*;
    pub use crate::generator;
    pub use crate::validator;
}
