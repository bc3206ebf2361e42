//! Operator-dependent formatting of raw condition values.
//!
//! This is a literal-formatting heuristic for the rendered preview text, not
//! a parameterized-query mechanism — execution goes through
//! [`super::params`], which keeps values out-of-band.

use crate::config::Operator;

/// Format a raw UI-supplied value for the given operator. Returns `None` for
/// operators that take no value.
pub fn format_value(op: Operator, raw: &str) -> Option<String> {
    if !op.needs_value() {
        return None;
    }
    let trimmed = raw.trim();

    if op.is_membership() {
        // IN / NOT IN: wrap in parens unless the user already did.
        if trimmed.starts_with('(') && trimmed.ends_with(')') {
            Some(trimmed.to_string())
        } else {
            Some(format!("({})", trimmed))
        }
    } else if op.is_pattern() {
        // LIKE family: always a string literal.
        if is_quoted(trimmed) {
            Some(trimmed.to_string())
        } else {
            Some(quote(trimmed))
        }
    } else if op.is_range() {
        // BETWEEN family: the raw value carries `low AND high`.
        Some(trimmed.to_string())
    } else if is_quoted(trimmed) || is_numeric(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(quote(trimmed))
    }
}

/// Strip one layer of surrounding single quotes, if present. Used when
/// lifting a value out-of-band as a bind parameter.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    if is_quoted(trimmed) {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'')
}

fn is_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Single-quote a literal, doubling any embedded quote.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
