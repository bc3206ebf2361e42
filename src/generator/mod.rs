//! SQL text generation from a [`QueryConfig`].
//!
//! A stateless, best-effort compiler: clauses render in the fixed order
//! SELECT, FROM, JOIN, WHERE, GROUP BY, ORDER BY, LIMIT, joined by newlines,
//! with empty clauses omitted. Malformed or half-built configurations render
//! to whatever text their state supports — the generator never errors,
//! because the configuration is always partially built during interactive
//! editing.

pub mod literals;
pub mod params;

use crate::config::{AggregateFunc, QueryConfig, SelectedColumn};

/// Render a configuration into newline-separated SQL text.
///
/// Pure and deterministic: the same configuration always renders to the same
/// text, and the configuration is never mutated.
pub fn render(config: &QueryConfig) -> String {
    let mut clauses = vec![select_clause(config)];
    clauses.extend(from_clauses(config));
    clauses.extend(join_clauses(config));
    if let Some(c) = where_clause(config) {
        clauses.push(c);
    }
    if let Some(c) = group_by_clause(config) {
        clauses.push(c);
    }
    if let Some(c) = order_by_clause(config) {
        clauses.push(c);
    }
    if let Some(c) = limit_clause(config) {
        clauses.push(c);
    }
    clauses.join("\n")
}

pub(crate) fn select_clause(config: &QueryConfig) -> String {
    let keyword = if config.distinct {
        "SELECT DISTINCT"
    } else {
        "SELECT"
    };

    if config.columns.is_empty() {
        return format!("{} *", keyword);
    }

    // One column per indented line. Cosmetic only; clause content is what
    // carries meaning.
    let cols: Vec<String> = config.columns.iter().map(render_column).collect();
    format!("{}\n  {}", keyword, cols.join(",\n  "))
}

fn render_column(col: &SelectedColumn) -> String {
    let base = format!("{}.{}", col.table_name, col.column_name);

    let mut rendered = match col.aggregate {
        Some(AggregateFunc::DateTrunc) => format!("DATE_TRUNC('day', {})", base),
        Some(AggregateFunc::Extract) => format!("EXTRACT(YEAR FROM {})", base),
        Some(AggregateFunc::Count) if col.column_name == "*" => "COUNT(*)".to_string(),
        Some(func) => format!("{}({})", func, base),
        None => base,
    };

    if let Some(alias) = &col.alias
        && !alias.is_empty()
    {
        rendered.push_str(&format!(" AS {}", alias));
    }
    rendered
}

/// FROM plus, when more than one table is selected and no joins are defined,
/// an implicit `CROSS JOIN` per remaining table. The fallback keeps a query
/// renderable before the user has drawn any join edges, at the cost of a full
/// Cartesian product.
pub(crate) fn from_clauses(config: &QueryConfig) -> Vec<String> {
    let Some(anchor) = config.anchor_table() else {
        return vec![];
    };

    let mut target = anchor.qualified_name();
    if let Some(alias) = &anchor.alias
        && !alias.is_empty()
    {
        target.push_str(&format!(" AS {}", alias));
    }
    let mut clauses = vec![format!("FROM {}", target)];

    if config.joins.is_empty() {
        for table in &config.tables[1..] {
            clauses.push(format!("CROSS JOIN {}", table.qualified_name()));
        }
    }
    clauses
}

pub(crate) fn join_clauses(config: &QueryConfig) -> Vec<String> {
    config
        .joins
        .iter()
        .map(|join| {
            let mut clause = format!(
                "{} JOIN {} ON {}.{} = {}.{}",
                join.kind.sql_keyword(),
                join.right_table,
                join.left_table,
                join.left_column,
                join.right_table,
                join.right_column
            );
            for pred in &join.extra_on {
                clause.push_str(&format!(
                    " AND {}.{} = {}.{}",
                    join.left_table, pred.left_column, join.right_table, pred.right_column
                ));
            }
            clause
        })
        .collect()
}

fn where_clause(config: &QueryConfig) -> Option<String> {
    if config.conditions.is_empty() {
        return None;
    }

    let mut out = String::from("WHERE ");
    for (i, cond) in config.conditions.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!(" {} ", cond.connector));
        }
        out.push_str(condition_column(&cond.column));
        out.push(' ');
        out.push_str(cond.op.sql_symbol());
        if let Some(value) = literals::format_value(cond.op, &cond.value) {
            out.push(' ');
            out.push_str(&value);
        }
    }
    Some(out)
}

/// Condition columns arrive as fully qualified paths but render by their
/// terminal segment, matching how the builder UI labels them.
pub(crate) fn condition_column(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

fn group_by_clause(config: &QueryConfig) -> Option<String> {
    if config.group_by.is_empty() {
        return None;
    }
    Some(format!("GROUP BY {}", config.group_by.join(", ")))
}

fn order_by_clause(config: &QueryConfig) -> Option<String> {
    let entries: Vec<String> = config
        .order_by
        .iter()
        .filter(|o| !o.column.is_empty())
        .map(|o| format!("{} {}", o.column, o.direction))
        .collect();
    if entries.is_empty() {
        return None;
    }
    Some(format!("ORDER BY {}", entries.join(", ")))
}

fn limit_clause(config: &QueryConfig) -> Option<String> {
    match config.limit {
        Some(n) if n > 0 => Some(format!("LIMIT {}", n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Join, JoinKind, Operator, SelectedColumn, SortOrder, TableRef};

    #[test]
    fn test_empty_config_renders_wildcard() {
        let config = QueryConfig::new();
        assert_eq!(render(&config), "SELECT *");
    }

    #[test]
    fn test_wildcard_with_table() {
        let config = QueryConfig::new().table("public", "users");
        assert_eq!(render(&config), "SELECT *\nFROM public.users");
    }

    #[test]
    fn test_distinct() {
        let config = QueryConfig::new().table("public", "users").distinct();
        assert_eq!(render(&config), "SELECT DISTINCT *\nFROM public.users");
    }

    #[test]
    fn test_column_alias() {
        let config = QueryConfig::new()
            .table("public", "users")
            .select(SelectedColumn::new("public", "users", "email").with_alias("contact"));
        assert_eq!(
            render(&config),
            "SELECT\n  users.email AS contact\nFROM public.users"
        );
    }

    #[test]
    fn test_empty_alias_renders_nothing() {
        let config = QueryConfig::new()
            .table("public", "users")
            .select(SelectedColumn::new("public", "users", "email").with_alias(""));
        assert_eq!(render(&config), "SELECT\n  users.email\nFROM public.users");
    }

    #[test]
    fn test_table_alias() {
        let config =
            QueryConfig::new().table_ref(TableRef::new("public", "users").with_alias("u"));
        assert_eq!(render(&config), "SELECT *\nFROM public.users AS u");
    }

    #[test]
    fn test_aggregate_templates() {
        let config = QueryConfig::new()
            .table("public", "orders")
            .select(SelectedColumn::new("public", "orders", "*").with_aggregate(AggregateFunc::Count))
            .select(SelectedColumn::new("public", "orders", "total").with_aggregate(AggregateFunc::Sum))
            .select(
                SelectedColumn::new("public", "orders", "created_at")
                    .with_aggregate(AggregateFunc::DateTrunc),
            )
            .select(
                SelectedColumn::new("public", "orders", "updated_at")
                    .with_aggregate(AggregateFunc::Extract)
                    .with_alias("year"),
            );
        let sql = render(&config);
        assert!(sql.contains("COUNT(*)"));
        assert!(sql.contains("SUM(orders.total)"));
        assert!(sql.contains("DATE_TRUNC('day', orders.created_at)"));
        assert!(sql.contains("EXTRACT(YEAR FROM orders.updated_at) AS year"));
    }

    #[test]
    fn test_cartesian_fallback() {
        let config = QueryConfig::new()
            .table("public", "users")
            .table("public", "orders");
        let sql = render(&config);
        assert_eq!(
            sql,
            "SELECT *\nFROM public.users\nCROSS JOIN public.orders"
        );
        assert_eq!(sql.matches("CROSS JOIN").count(), 1);
    }

    #[test]
    fn test_explicit_join_suppresses_fallback() {
        let config = QueryConfig::new()
            .table("public", "users")
            .table("public", "orders")
            .join(Join::new(
                JoinKind::Left,
                "orders",
                "user_id",
                "users",
                "id",
            ));
        let sql = render(&config);
        assert!(!sql.contains("CROSS JOIN"));
        assert!(sql.contains("LEFT JOIN users ON orders.user_id = users.id"));
    }

    #[test]
    fn test_composite_key_join() {
        let config = QueryConfig::new().table("public", "orders").join(
            Join::new(JoinKind::Inner, "orders", "user_id", "users", "id")
                .and_on("region", "region"),
        );
        assert!(render(&config).contains(
            "INNER JOIN users ON orders.user_id = users.id AND orders.region = users.region"
        ));
    }

    #[test]
    fn test_full_join_keyword() {
        let config = QueryConfig::new().table("public", "users").join(Join::new(
            JoinKind::Full,
            "users",
            "id",
            "profiles",
            "user_id",
        ));
        assert!(render(&config).contains("FULL OUTER JOIN profiles"));
    }

    #[test]
    fn test_where_connectors() {
        let config = QueryConfig::new()
            .table("public", "users")
            .filter("public.users.status", Operator::Eq, "active")
            .or_filter("public.users.role", Operator::Eq, "admin")
            .filter("public.users.age", Operator::Gte, "21");
        let sql = render(&config);
        assert!(sql.contains("WHERE status = 'active' OR role = 'admin' AND age >= 21"));
    }

    #[test]
    fn test_null_check_renders_no_value() {
        let config = QueryConfig::new()
            .table("public", "users")
            .filter("public.users.deleted_at", Operator::IsNull, "");
        assert!(render(&config).contains("WHERE deleted_at IS NULL"));
    }

    #[test]
    fn test_group_order_limit() {
        let config = QueryConfig::new()
            .table("public", "orders")
            .group_by("public.orders.region")
            .order_by("public.orders.region", SortOrder::Desc)
            .limit(25);
        assert_eq!(
            render(&config),
            "SELECT *\nFROM public.orders\nGROUP BY public.orders.region\nORDER BY public.orders.region DESC\nLIMIT 25"
        );
    }

    #[test]
    fn test_zero_limit_omitted() {
        let config = QueryConfig::new().table("public", "users").limit(0);
        assert!(!render(&config).contains("LIMIT"));
    }

    #[test]
    fn test_empty_order_by_column_skipped() {
        let config = QueryConfig::new()
            .table("public", "users")
            .order_by("", SortOrder::Asc);
        assert!(!render(&config).contains("ORDER BY"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = QueryConfig::new()
            .table("public", "users")
            .table("public", "orders")
            .column("public", "users", "id")
            .filter("public.users.status", Operator::Eq, "active")
            .group_by("public.users.status")
            .order_by("public.users.id", SortOrder::Asc)
            .limit(10);
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn test_clause_order() {
        let config = QueryConfig::new()
            .table("public", "users")
            .table("public", "orders")
            .column("public", "users", "id")
            .join(Join::new(
                JoinKind::Inner,
                "orders",
                "user_id",
                "users",
                "id",
            ))
            .filter("public.users.status", Operator::Eq, "active")
            .group_by("public.users.status")
            .order_by("public.users.id", SortOrder::Asc)
            .limit(10);
        let sql = render(&config);
        let positions: Vec<usize> = [
            "SELECT", "FROM", "JOIN", "WHERE", "GROUP BY", "ORDER BY", "LIMIT",
        ]
        .iter()
        .map(|kw| sql.find(kw).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
