//! The configuration model: the in-memory, UI-editable description of a
//! query under construction.

mod columns;
mod conditions;
mod joins;
mod operators;
mod query;
mod tables;

pub use columns::{SelectedColumn, column_id};
pub use conditions::Condition;
pub use joins::{Join, JoinPredicate};
pub use operators::{AggregateFunc, JoinKind, LogicalOp, Operator, SortOrder};
pub use query::{OrderBy, QueryConfig};
pub use tables::TableRef;
