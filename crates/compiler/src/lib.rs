//! Compiles filter and sort conditions into the textual expressions consumed
//! by a string-expression query evaluator.

use model::{condition::Condition, predicate::CompiledPredicate, sort::SortCondition};

pub mod error;
pub mod query;

pub use error::CompileError;
pub use query::{
    builder::{order::SortCompiler, predicate::PredicateCompiler},
    dialect::{Dialect, DialectKind, DynamicLinq, Postgres},
};

/// Compiles conditions with the default separators into Dynamic LINQ.
pub fn compile_predicate(conditions: &[Condition]) -> Result<CompiledPredicate, CompileError> {
    PredicateCompiler::default().compile(conditions)
}

/// Compiles sort conditions into a Dynamic LINQ ordering clause.
pub fn compile_ordering(sorts: &[SortCondition]) -> String {
    SortCompiler::default().compile(sorts)
}
