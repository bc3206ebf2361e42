//! Root query configuration and its mutation API.
//!
//! The UI produces a new configuration value per edit; the generator and
//! validator only ever read a snapshot. Adds are idempotent by key, and
//! removing a table cascade-cleans every entry that referenced it so a
//! configuration never carries dangling references.

use crate::config::{
    Condition, Join, LogicalOp, Operator, SelectedColumn, SortOrder, TableRef, column_id,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ORDER BY entry: a fully qualified column path plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    #[serde(default)]
    pub direction: SortOrder,
}

/// The structured, UI-editable description of a query under construction.
///
/// The first entry of `tables` is the anchor (FROM) table; remaining tables
/// are connected via `joins`, or combined positionally as cross joins when no
/// joins are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryConfig {
    pub tables: Vec<TableRef>,
    pub columns: Vec<SelectedColumn>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub distinct: bool,
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The anchor (FROM) table, if any table has been selected yet.
    pub fn anchor_table(&self) -> Option<&TableRef> {
        self.tables.first()
    }

    /// Add a table. No-op if `(schema, name)` is already selected.
    pub fn table(mut self, schema: impl Into<String>, name: impl Into<String>) -> Self {
        let schema = schema.into();
        let name = name.into();
        if !self.tables.iter().any(|t| t.same_relation(&schema, &name)) {
            self.tables.push(TableRef::new(schema, name));
        }
        self
    }

    pub fn table_ref(mut self, table: TableRef) -> Self {
        if !self
            .tables
            .iter()
            .any(|t| t.same_relation(&table.schema, &table.name))
        {
            self.tables.push(table);
        }
        self
    }

    /// Add a projected column. No-op if the same column path is already
    /// selected; insertion order determines output order.
    pub fn column(
        self,
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.select(SelectedColumn::new(schema, table, column))
    }

    pub fn select(mut self, column: SelectedColumn) -> Self {
        if !self.columns.iter().any(|c| c.id == column.id) {
            self.columns.push(column);
        }
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Append an AND-connected condition.
    pub fn filter(
        mut self,
        column: impl Into<String>,
        op: Operator,
        value: impl Into<String>,
    ) -> Self {
        self.conditions.push(Condition::new(column, op, value));
        self
    }

    /// Append an OR-connected condition.
    pub fn or_filter(
        mut self,
        column: impl Into<String>,
        op: Operator,
        value: impl Into<String>,
    ) -> Self {
        self.conditions
            .push(Condition::new(column, op, value).with_connector(LogicalOp::Or));
        self
    }

    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by.push(column.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortOrder) -> Self {
        self.order_by.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Remove a table and cascade-clean everything that referenced it:
    /// selected columns of that table, join edges touching it, and
    /// conditions / group-by / order-by entries under its qualified path.
    pub fn remove_table(&mut self, schema: &str, name: &str) {
        let Some(pos) = self
            .tables
            .iter()
            .position(|t| t.same_relation(schema, name))
        else {
            return;
        };
        let removed = self.tables.remove(pos);
        let prefix = format!("{}.", removed.qualified_name());

        self.columns
            .retain(|c| !(c.schema == removed.schema && c.table_name == removed.name));
        self.joins.retain(|j| !j.touches(&removed.name));
        self.conditions.retain(|c| !c.column.starts_with(&prefix));
        self.group_by.retain(|g| !g.starts_with(&prefix));
        self.order_by.retain(|o| !o.column.starts_with(&prefix));
    }

    pub fn remove_column(&mut self, id: &str) {
        self.columns.retain(|c| c.id != id);
    }

    pub fn remove_join(&mut self, id: Uuid) {
        self.joins.retain(|j| j.id != id);
    }

    pub fn remove_condition(&mut self, id: Uuid) {
        self.conditions.retain(|c| c.id != id);
    }

    /// Whether the given column path is currently selected.
    pub fn has_column(&self, schema: &str, table: &str, column: &str) -> bool {
        let id = column_id(schema, table, column);
        self.columns.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JoinKind;

    #[test]
    fn test_add_table_idempotent() {
        let config = QueryConfig::new()
            .table("public", "users")
            .table("public", "users");
        assert_eq!(config.tables.len(), 1);
        assert_eq!(config.anchor_table().unwrap().name, "users");
    }

    #[test]
    fn test_add_column_idempotent() {
        let config = QueryConfig::new()
            .column("public", "users", "id")
            .column("public", "users", "id")
            .column("public", "users", "email");
        assert_eq!(config.columns.len(), 2);
        // Insertion order preserved
        assert_eq!(config.columns[0].column_name, "id");
        assert_eq!(config.columns[1].column_name, "email");
    }

    #[test]
    fn test_remove_table_cascades() {
        let mut config = QueryConfig::new()
            .table("public", "users")
            .table("public", "orders")
            .column("public", "users", "id")
            .column("public", "orders", "total")
            .join(Join::new(
                JoinKind::Inner,
                "orders",
                "user_id",
                "users",
                "id",
            ))
            .filter("public.orders.total", Operator::Gt, "100")
            .group_by("public.orders.total")
            .order_by("public.orders.total", SortOrder::Desc);

        config.remove_table("public", "orders");

        assert_eq!(config.tables.len(), 1);
        assert_eq!(config.columns.len(), 1);
        assert!(config.joins.is_empty());
        assert!(config.conditions.is_empty());
        assert!(config.group_by.is_empty());
        assert!(config.order_by.is_empty());
        // Entries of the surviving table are untouched
        assert!(config.has_column("public", "users", "id"));
    }

    #[test]
    fn test_remove_unknown_table_is_noop() {
        let mut config = QueryConfig::new().table("public", "users");
        config.remove_table("public", "orders");
        assert_eq!(config.tables.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = QueryConfig::new()
            .table("public", "users")
            .column("public", "users", "id")
            .filter("public.users.status", Operator::Eq, "active")
            .limit(50);

        let json = serde_json::to_string(&config).unwrap();
        let back: QueryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
