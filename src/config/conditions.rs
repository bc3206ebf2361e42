use crate::config::{LogicalOp, Operator};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One filter condition.
///
/// `connector` links this condition to the previous one in sequence and is
/// ignored for the first condition. Conditions render left-to-right in list
/// order; there is no parenthetical precedence grouping at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: Uuid,
    /// Fully qualified column path (`schema.table.column`).
    pub column: String,
    pub op: Operator,
    /// Raw value text as typed in the UI. Formatting (quoting, parentheses)
    /// is operator-dependent and applied at render time.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub connector: LogicalOp,
}

impl Condition {
    pub fn new(column: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            column: column.into(),
            op,
            value: value.into(),
            connector: LogicalOp::And,
        }
    }

    pub fn with_connector(mut self, connector: LogicalOp) -> Self {
        self.connector = connector;
        self
    }
}
