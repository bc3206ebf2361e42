//! Structural screening of query text before execution or export.
//!
//! A pure, text-only check: no schema access, no parsing beyond token
//! boundaries. All applicable failures are accumulated and returned
//! together so the UI can list every reason at once. This is a heuristic
//! screen, not a security boundary — deployments must pair it with a
//! read-only execution credential.

use regex::Regex;
use std::sync::OnceLock;

/// Keywords whose presence anywhere in the text marks it unsafe to execute.
pub const FORBIDDEN_KEYWORDS: &[&str] = &[
    "drop", "delete", "update", "insert", "alter", "create", "truncate",
];

/// Structural validation failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text does not begin with the read-only query keyword.
    NotSelect,
    /// Text has no FROM clause.
    MissingFrom,
    /// Unequal `(` / `)` counts.
    UnbalancedParens { open: usize, close: usize },
    /// A denylisted mutating/DDL keyword appears as a whole word.
    ForbiddenKeyword(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotSelect => write!(f, "Query must start with SELECT"),
            ValidationError::MissingFrom => write!(f, "Query must contain a FROM clause"),
            ValidationError::UnbalancedParens { open, close } => write!(
                f,
                "Unbalanced parentheses: {} opening, {} closing",
                open, close
            ),
            ValidationError::ForbiddenKeyword(kw) => {
                write!(f, "Forbidden keyword '{}' is not allowed", kw.to_uppercase())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validation: every accumulated failure, in rule order.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn denylist_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = FORBIDDEN_KEYWORDS.join("|");
        Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("denylist pattern is valid")
    })
}

/// Screen query text for structural validity and forbidden operations.
///
/// Rules, all checked, failures accumulated in order:
/// 1. normalized text starts with `select`;
/// 2. normalized text contains the word `from`;
/// 3. parenthesis counts balance;
/// 4. no denylisted keyword appears as a whole word. Word-boundary matching
///    keeps identifiers like `created_at` from tripping the screen.
pub fn validate(sql: &str) -> ValidationResult {
    let normalized = sql.trim().to_lowercase();
    let mut errors = Vec::new();

    if !normalized.starts_with("select") {
        errors.push(ValidationError::NotSelect);
    }

    if !word_present(&normalized, "from") {
        errors.push(ValidationError::MissingFrom);
    }

    let open = normalized.matches('(').count();
    let close = normalized.matches(')').count();
    if open != close {
        errors.push(ValidationError::UnbalancedParens { open, close });
    }

    let mut seen: Vec<&str> = Vec::new();
    for m in denylist_pattern().find_iter(&normalized) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    for kw in seen {
        errors.push(ValidationError::ForbiddenKeyword(kw.to_string()));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Narrow first-line gate for the execute/export entry points: the leading
/// normalized token must be `select`. Runs before the full screen.
pub fn is_read_only(sql: &str) -> bool {
    sql.trim()
        .split_whitespace()
        .next()
        .is_some_and(|token| token.eq_ignore_ascii_case("select"))
}

fn word_present(normalized: &str, word: &str) -> bool {
    normalized.split(|c: char| !c.is_alphanumeric() && c != '_').any(|t| t == word)
}
