use serde::{Deserialize, Serialize};

/// A queryable relation. Identity within a configuration is `(schema, name)`;
/// an empty alias means references use `schema.name` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// `schema.name`, the form used in FROM and cross-join clauses.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Same `(schema, name)` pair as another ref, alias ignored.
    pub fn same_relation(&self, schema: &str, name: &str) -> bool {
        self.schema == schema && self.name == name
    }
}
