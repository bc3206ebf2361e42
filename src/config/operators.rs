use crate::error::QuarryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison operator for a filter condition.
///
/// The set matches what the builder UI exposes in its operator dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    Like,
    ILike,
    NotLike,
    NotILike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    Between,
    NotBetween,
}

impl Operator {
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::ILike => "ILIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::NotILike => "NOT ILIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
        }
    }

    /// IS NULL and IS NOT NULL take no right-hand value.
    pub fn needs_value(&self) -> bool {
        !matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Set-membership operators: the value renders inside parentheses.
    pub fn is_membership(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Pattern-match operators: the value renders single-quoted.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Operator::Like | Operator::ILike | Operator::NotLike | Operator::NotILike
        )
    }

    /// Range operators: the value already carries `low AND high` and passes
    /// through verbatim.
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Between | Operator::NotBetween)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_symbol())
    }
}

impl FromStr for Operator {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "=" => Ok(Operator::Eq),
            "!=" | "<>" => Ok(Operator::Ne),
            "<" => Ok(Operator::Lt),
            ">" => Ok(Operator::Gt),
            "<=" => Ok(Operator::Lte),
            ">=" => Ok(Operator::Gte),
            "LIKE" => Ok(Operator::Like),
            "ILIKE" => Ok(Operator::ILike),
            "NOT LIKE" => Ok(Operator::NotLike),
            "NOT ILIKE" => Ok(Operator::NotILike),
            "IN" => Ok(Operator::In),
            "NOT IN" => Ok(Operator::NotIn),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            "BETWEEN" => Ok(Operator::Between),
            "NOT BETWEEN" => Ok(Operator::NotBetween),
            other => Err(QuarryError::InvalidOperator(other.to_string())),
        }
    }
}

/// Logical connector between consecutive conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

/// Sort direction for an ORDER BY entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// Join type for one join edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL OUTER",
        }
    }
}

impl FromStr for JoinKind {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INNER" => Ok(JoinKind::Inner),
            "LEFT" => Ok(JoinKind::Left),
            "RIGHT" => Ok(JoinKind::Right),
            "FULL" | "OUTER" | "FULL OUTER" => Ok(JoinKind::Full),
            other => Err(QuarryError::InvalidOperator(other.to_string())),
        }
    }
}

/// Aggregate function applicable to a selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    DateTrunc,
    Extract,
    Upper,
    Lower,
    Length,
}

impl AggregateFunc {
    /// Declared parameter arity. Used by the UI to prompt for arguments;
    /// the generator itself renders fixed templates and does not enforce it.
    pub fn param_count(&self) -> usize {
        match self {
            AggregateFunc::DateTrunc | AggregateFunc::Extract => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunc::Count => write!(f, "COUNT"),
            AggregateFunc::Sum => write!(f, "SUM"),
            AggregateFunc::Avg => write!(f, "AVG"),
            AggregateFunc::Min => write!(f, "MIN"),
            AggregateFunc::Max => write!(f, "MAX"),
            AggregateFunc::DateTrunc => write!(f, "DATE_TRUNC"),
            AggregateFunc::Extract => write!(f, "EXTRACT"),
            AggregateFunc::Upper => write!(f, "UPPER"),
            AggregateFunc::Lower => write!(f, "LOWER"),
            AggregateFunc::Length => write!(f, "LENGTH"),
        }
    }
}

impl FromStr for AggregateFunc {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COUNT" => Ok(AggregateFunc::Count),
            "SUM" => Ok(AggregateFunc::Sum),
            "AVG" => Ok(AggregateFunc::Avg),
            "MIN" => Ok(AggregateFunc::Min),
            "MAX" => Ok(AggregateFunc::Max),
            "DATE_TRUNC" => Ok(AggregateFunc::DateTrunc),
            "EXTRACT" => Ok(AggregateFunc::Extract),
            "UPPER" => Ok(AggregateFunc::Upper),
            "LOWER" => Ok(AggregateFunc::Lower),
            "LENGTH" => Ok(AggregateFunc::Length),
            other => Err(QuarryError::InvalidAggregate(other.to_string())),
        }
    }
}
