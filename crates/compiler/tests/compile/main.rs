//! Compiler integration tests
//!
//! These tests drive the public compile functions with condition lists the
//! way a data-access layer would.

mod concurrency;
mod ordering;
mod placeholders;
mod predicates;
mod scenario;

use model::condition::{Condition, QueryOperator};

pub fn cond(field: &str, operator: QueryOperator, value: &str) -> Condition {
    Condition::new(field, operator, value)
}

/// Placeholder indices in the order they appear in `expression`.
pub fn placeholder_indices(expression: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut rest = expression;
    while let Some(pos) = rest.find('@') {
        let digits: String = rest[pos + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let Ok(index) = digits.parse() {
            indices.push(index);
        }
        rest = &rest[pos + 1..];
    }
    indices
}
