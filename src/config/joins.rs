use crate::config::JoinKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One extra equality predicate ANDed into a join's ON clause
/// (composite-key joins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPredicate {
    pub left_column: String,
    pub right_column: String,
}

/// One join edge between two selected tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub id: Uuid,
    pub kind: JoinKind,
    pub left_table: String,
    pub left_column: String,
    pub right_table: String,
    pub right_column: String,
    #[serde(default)]
    pub extra_on: Vec<JoinPredicate>,
}

impl Join {
    pub fn new(
        kind: JoinKind,
        left_table: impl Into<String>,
        left_column: impl Into<String>,
        right_table: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            left_table: left_table.into(),
            left_column: left_column.into(),
            right_table: right_table.into(),
            right_column: right_column.into(),
            extra_on: vec![],
        }
    }

    /// Add another equality predicate to the same ON clause.
    pub fn and_on(
        mut self,
        left_column: impl Into<String>,
        right_column: impl Into<String>,
    ) -> Self {
        self.extra_on.push(JoinPredicate {
            left_column: left_column.into(),
            right_column: right_column.into(),
        });
        self
    }

    /// Whether this edge touches the given table on either side.
    pub fn touches(&self, table: &str) -> bool {
        self.left_table == table || self.right_table == table
    }
}
