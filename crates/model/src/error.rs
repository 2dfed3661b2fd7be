use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Operator code or name outside the supported set.
    #[error("Unsupported filter operator: {0}")]
    UnsupportedOperator(String),

    /// Sort direction code or name outside the supported set.
    #[error("Unsupported sort direction: {0}")]
    UnsupportedDirection(String),

    #[error("Invalid condition syntax: {0}")]
    InvalidSyntax(String),
}
