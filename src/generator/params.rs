//! Parameterized rendering: the statement actually sent for execution.
//!
//! The newline-formatted text from [`super::render`] is the human-readable
//! preview; this module renders the same statement with scalar condition
//! values lifted out-of-band as `$1..$n` placeholders so the executor binds
//! them instead of inlining literals. Membership (`IN`) and range
//! (`BETWEEN`) values stay inline — their raw text is a list or range
//! expression, not a single scalar.

use super::literals;
use crate::config::QueryConfig;

/// A value bound to a placeholder, typed from the raw UI text.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl BindValue {
    /// Classify a raw UI value. A quoted value is always text; otherwise
    /// integers, floats, then booleans are tried, falling back to text.
    fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('\'') && trimmed.ends_with('\'') && trimmed.len() >= 2 {
            return BindValue::Text(literals::unquote(trimmed).to_string());
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return BindValue::Int(n);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return BindValue::Float(n);
        }
        match trimmed {
            "true" | "TRUE" => BindValue::Bool(true),
            "false" | "FALSE" => BindValue::Bool(false),
            _ => BindValue::Text(trimmed.to_string()),
        }
    }
}

/// Render a configuration with condition values as bind parameters.
///
/// Deterministic like the preview render: same clauses, same order, same
/// omission rules. Placeholders are numbered in condition order.
pub fn render_parameterized(config: &QueryConfig) -> (String, Vec<BindValue>) {
    let mut params = Vec::new();

    let mut clauses = vec![super::select_clause(config)];
    clauses.extend(super::from_clauses(config));
    clauses.extend(super::join_clauses(config));
    if let Some(c) = where_clause(config, &mut params) {
        clauses.push(c);
    }
    if !config.group_by.is_empty() {
        clauses.push(format!("GROUP BY {}", config.group_by.join(", ")));
    }
    let order_entries: Vec<String> = config
        .order_by
        .iter()
        .filter(|o| !o.column.is_empty())
        .map(|o| format!("{} {}", o.column, o.direction))
        .collect();
    if !order_entries.is_empty() {
        clauses.push(format!("ORDER BY {}", order_entries.join(", ")));
    }
    if let Some(n) = config.limit
        && n > 0
    {
        clauses.push(format!("LIMIT {}", n));
    }

    (clauses.join("\n"), params)
}

fn where_clause(config: &QueryConfig, params: &mut Vec<BindValue>) -> Option<String> {
    if config.conditions.is_empty() {
        return None;
    }

    let mut out = String::from("WHERE ");
    for (i, cond) in config.conditions.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!(" {} ", cond.connector));
        }
        out.push_str(super::condition_column(&cond.column));
        out.push(' ');
        out.push_str(cond.op.sql_symbol());

        if !cond.op.needs_value() {
            continue;
        }
        if cond.op.is_membership() || cond.op.is_range() {
            if let Some(value) = literals::format_value(cond.op, &cond.value) {
                out.push(' ');
                out.push_str(&value);
            }
        } else {
            params.push(BindValue::classify(&cond.value));
            out.push_str(&format!(" ${}", params.len()));
        }
    }
    Some(out)
}
