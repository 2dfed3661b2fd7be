//! Lowers filter conditions into a predicate AST and renders it.

use crate::{
    error::CompileError,
    query::{
        ast::predicate::{CompareOp, LogicalOp, Predicate, StringMethod},
        dialect::{Dialect, DynamicLinq},
        renderer::{Render, Renderer},
    },
};
use model::{
    condition::{Condition, GroupJoin, QueryOperator},
    predicate::CompiledPredicate,
    syntax::ConditionSyntax,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Compiles conditions into an expression with positional placeholders.
///
/// Holds configuration only; every `compile` call renders into its own
/// argument list, so one compiler can be shared across threads.
#[derive(Clone)]
pub struct PredicateCompiler {
    syntax: ConditionSyntax,
    dialect: Arc<dyn Dialect>,
}

impl Default for PredicateCompiler {
    fn default() -> Self {
        Self::new(ConditionSyntax::default(), Arc::new(DynamicLinq))
    }
}

impl std::fmt::Debug for PredicateCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateCompiler")
            .field("syntax", &self.syntax)
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl PredicateCompiler {
    pub fn new(syntax: ConditionSyntax, dialect: Arc<dyn Dialect>) -> Self {
        Self { syntax, dialect }
    }

    /// Compiles the conditions into one AND-joined expression.
    ///
    /// Conditions without a field, and conditions that lower to nothing, are
    /// left out. When nothing remains the result is empty, meaning no filter.
    pub fn compile(&self, conditions: &[Condition]) -> Result<CompiledPredicate, CompileError> {
        let Some(predicate) = self.lower(conditions)? else {
            debug!(
                conditions = conditions.len(),
                "No filter terms produced, skipping predicate"
            );
            return Ok(CompiledPredicate::empty());
        };

        let mut renderer = Renderer::new(self.dialect.as_ref());
        predicate.render(&mut renderer);
        let (expression, arguments) = renderer.finish();

        debug!(
            conditions = conditions.len(),
            arguments = arguments.len(),
            dialect = self.dialect.name(),
            "Compiled filter predicate"
        );

        Ok(CompiledPredicate::new(expression, arguments))
    }

    /// Lowers the conditions into a predicate tree without rendering it.
    pub fn lower(&self, conditions: &[Condition]) -> Result<Option<Predicate>, CompileError> {
        let mut terms = Vec::with_capacity(conditions.len());

        for condition in conditions.iter().filter(|c| c.has_field()) {
            match self.lower_condition(condition)? {
                Some(term) => terms.push(term),
                None => trace!(%condition, "Condition dropped"),
            }
        }

        if terms.is_empty() {
            return Ok(None);
        }

        Ok(Some(Predicate::group(LogicalOp::And, terms)))
    }

    /// Lowers one condition, expanding a field list into one term per field.
    pub fn lower_condition(&self, condition: &Condition) -> Result<Option<Predicate>, CompileError> {
        let targets = condition.targets(&self.syntax);

        if !targets.expanded {
            return match targets.fields.first() {
                Some(field) => self.lower_field(field, condition),
                None => Ok(None),
            };
        }

        let mut terms = Vec::with_capacity(targets.fields.len());
        for field in targets.fields {
            let child = condition.for_field(field);
            if let Some(term) = self.lower_field(&child.field, &child)? {
                terms.push(term);
            }
        }

        if terms.is_empty() {
            return Ok(None);
        }

        let op = match targets.join {
            GroupJoin::Or => LogicalOp::Or,
            GroupJoin::And => LogicalOp::And,
        };
        Ok(Some(Predicate::group(op, terms)))
    }

    /// Lowers the test of `condition` against a single field.
    fn lower_field(
        &self,
        field: &str,
        condition: &Condition,
    ) -> Result<Option<Predicate>, CompileError> {
        if !condition.has_value() {
            if condition.skip_if_value_empty {
                return Ok(None);
            }

            // Only equality has a meaningful null comparison.
            return Ok(match condition.operator {
                QueryOperator::Equal => Some(Predicate::compare_null(field, CompareOp::Eq)),
                QueryOperator::NotEqual => Some(Predicate::compare_null(field, CompareOp::NotEq)),
                _ => None,
            });
        }

        let value = condition.value.as_str();
        let predicate = match condition.operator {
            QueryOperator::Equal => Some(Predicate::compare(field, CompareOp::Eq, value)),
            QueryOperator::NotEqual => Some(Predicate::compare(field, CompareOp::NotEq, value)),
            QueryOperator::Greater => Some(Predicate::compare(field, CompareOp::Gt, value)),
            QueryOperator::GreaterEqual => Some(Predicate::compare(field, CompareOp::GtEq, value)),
            QueryOperator::Less => Some(Predicate::compare(field, CompareOp::Lt, value)),
            QueryOperator::LessEqual => Some(Predicate::compare(field, CompareOp::LtEq, value)),
            QueryOperator::StartsWith => Some(Predicate::string_match(
                field,
                StringMethod::StartsWith,
                value,
            )),
            QueryOperator::EndsWith => Some(Predicate::string_match(
                field,
                StringMethod::EndsWith,
                value,
            )),
            QueryOperator::Contains => Some(Predicate::string_match(
                field,
                StringMethod::Contains,
                value,
            )),
            QueryOperator::In => self.lower_membership(field, value, CompareOp::Eq, LogicalOp::Or),
            QueryOperator::NotIn => {
                self.lower_membership(field, value, CompareOp::NotEq, LogicalOp::And)
            }
            QueryOperator::Between => {
                Some(self.lower_range(field, value, CompareOp::Gt, CompareOp::Lt)?)
            }
            QueryOperator::BetweenEqualStart => {
                Some(self.lower_range(field, value, CompareOp::GtEq, CompareOp::Lt)?)
            }
            QueryOperator::BetweenEqualEnd => {
                Some(self.lower_range(field, value, CompareOp::Gt, CompareOp::LtEq)?)
            }
            QueryOperator::BetweenEqualStartAndEnd => {
                Some(self.lower_range(field, value, CompareOp::GtEq, CompareOp::LtEq)?)
            }
        };

        Ok(predicate)
    }

    /// One comparison per sub-value joined by `join`: `field == v0 or field == v1`
    /// for In and its De Morgan dual `field != v0 and field != v1` for NotIn.
    /// Nothing when the split is empty.
    fn lower_membership(
        &self,
        field: &str,
        value: &str,
        op: CompareOp,
        join: LogicalOp,
    ) -> Option<Predicate> {
        let terms: Vec<Predicate> = self
            .syntax
            .split_values(value)
            .map(|v| Predicate::compare(field, op, v))
            .collect();

        if terms.is_empty() {
            return None;
        }

        Some(Predicate::chain(join, terms))
    }

    /// `field <lower> v0 and field <upper> v1`; the value must hold exactly
    /// two bounds since a lone bound cannot say which side is missing.
    fn lower_range(
        &self,
        field: &str,
        value: &str,
        lower: CompareOp,
        upper: CompareOp,
    ) -> Result<Predicate, CompileError> {
        let bounds: Vec<&str> = self.syntax.split_values(value).collect();

        let [start, end] = bounds.as_slice() else {
            warn!(
                field,
                value,
                bounds = bounds.len(),
                "Range filter value does not hold exactly two bounds"
            );
            return Err(CompileError::MalformedRangeValue {
                value: value.to_string(),
            });
        };

        Ok(Predicate::chain(
            LogicalOp::And,
            vec![
                Predicate::compare(field, lower, start),
                Predicate::compare(field, upper, end),
            ],
        ))
    }
}
