//! Error types for Quarry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuarryError {
    /// Query text failed the structural screen. Carries every accumulated
    /// message, joined, so callers can surface all of them at once.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Execute/export entry gate: statement does not lead with SELECT.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Unrecognized comparison operator token from the UI.
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    /// Unrecognized aggregate function token from the UI.
    #[error("Invalid aggregate function: '{0}'")]
    InvalidAggregate(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Execution error: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Quarry operations.
pub type QuarryResult<T> = Result<T, QuarryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuarryError::InvalidOperator("=~".to_string());
        assert_eq!(err.to_string(), "Invalid operator: '=~'");
    }
}
