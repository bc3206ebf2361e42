//! Database execution boundary.
//!
//! Everything above this module is pure and synchronous; this is where
//! screened query text finally meets a driver. Both entry points gate on
//! [`validator::is_read_only`] first and then run the full structural screen,
//! surfacing every accumulated message. No retries, no caching — a failed
//! call is returned to the caller as-is.

use crate::config::QueryConfig;
use crate::error::QuarryError;
use crate::generator::params::{BindValue, render_parameterized};
use crate::validator;

use serde::Serialize;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Column, Row, TypeInfo};

/// Executed query output: ordered column names and ordered value rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// A connection to the user-supplied data source.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Connect using a driver URL (`postgres://`, `mysql://`, `sqlite://`).
    pub async fn connect(url: &str) -> Result<Self, QuarryError> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| QuarryError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Execute a configuration: renders the parameterized form, screens it,
    /// binds the lifted values, and returns the ordered result set.
    pub async fn run(&self, config: &QueryConfig) -> Result<ResultSet, QuarryError> {
        let (sql, params) = render_parameterized(config);
        screen(&sql)?;

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = match param {
                BindValue::Bool(v) => query.bind(*v),
                BindValue::Int(v) => query.bind(*v),
                BindValue::Float(v) => query.bind(*v),
                BindValue::Text(v) => query.bind(v.as_str()),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QuarryError::Execution(e.to_string()))?;

        Ok(to_result_set(&rows))
    }

    /// Execute user-editable query text verbatim after screening. Used by
    /// the execute/export entry points when the text did not come from the
    /// generator.
    pub async fn run_text(&self, sql: &str) -> Result<ResultSet, QuarryError> {
        screen(sql)?;

        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QuarryError::Execution(e.to_string()))?;

        Ok(to_result_set(&rows))
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

/// First the narrow leading-token gate, then the full structural screen.
fn screen(sql: &str) -> Result<(), QuarryError> {
    if !validator::is_read_only(sql) {
        return Err(QuarryError::Rejected(
            "only SELECT statements may be executed".to_string(),
        ));
    }
    validator::validate(sql).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        QuarryError::Validation(messages.join("; "))
    })
}

/// Decode driver rows into the ordered boundary shape. Column names come
/// from the first row; an empty result set carries no column metadata.
fn to_result_set(rows: &[AnyRow]) -> ResultSet {
    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let decoded = rows.iter().map(decode_row).collect();

    ResultSet {
        columns,
        rows: decoded,
    }
}

fn decode_row(row: &AnyRow) -> Vec<serde_json::Value> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let type_name = column.type_info().name();
            match type_name {
                "BOOL" | "BOOLEAN" => row
                    .try_get::<bool, _>(i)
                    .map(serde_json::Value::Bool)
                    .unwrap_or(serde_json::Value::Null),
                "INT2" | "INT4" | "INT8" | "INTEGER" | "BIGINT" | "SMALLINT" => row
                    .try_get::<i64, _>(i)
                    .map(|v| serde_json::Value::Number(v.into()))
                    .unwrap_or(serde_json::Value::Null),
                "FLOAT4" | "FLOAT8" | "REAL" | "DOUBLE" => row
                    .try_get::<f64, _>(i)
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
                _ => row
                    .try_get::<String, _>(i)
                    .map(serde_json::Value::String)
                    .unwrap_or(serde_json::Value::Null),
            }
        })
        .collect()
}
