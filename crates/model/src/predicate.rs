use serde::{Deserialize, Serialize};

/// Compiled filter: an expression with positional placeholders and the
/// arguments they refer to. `arguments[i]` belongs to placeholder `i`, so
/// the two halves only travel together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPredicate {
    expression: String,
    arguments: Vec<String>,
}

impl CompiledPredicate {
    pub fn new(expression: String, arguments: Vec<String>) -> Self {
        Self {
            expression,
            arguments,
        }
    }

    /// No filter; callers pass the source through unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.expression, self.arguments)
    }
}
