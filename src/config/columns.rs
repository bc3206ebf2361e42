use crate::config::AggregateFunc;
use serde::{Deserialize, Serialize};

/// A projected output column.
///
/// `id` is derived from the full column path and doubles as the uniqueness
/// key within a configuration's selected-column set. Insertion order of the
/// set determines output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedColumn {
    pub id: String,
    pub schema: String,
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub aggregate: Option<AggregateFunc>,
}

impl SelectedColumn {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        let schema = schema.into();
        let table = table.into();
        let column = column.into();
        Self {
            id: column_id(&schema, &table, &column),
            schema,
            table_name: table,
            column_name: column,
            alias: None,
            aggregate: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_aggregate(mut self, func: AggregateFunc) -> Self {
        self.aggregate = Some(func);
        self
    }

    /// Fully qualified path, also the column's identity.
    pub fn path(&self) -> &str {
        &self.id
    }
}

/// Deterministic column identity: `schema.table.column`.
pub fn column_id(schema: &str, table: &str, column: &str) -> String {
    format!("{}.{}.{}", schema, table, column)
}
