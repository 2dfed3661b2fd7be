use crate::syntax::ConditionSyntax;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod operator;

pub use operator::{OperatorRepr, QueryOperator};

/// One field-level filter test.
///
/// `field` may name several fields (`Name,Title`) to apply the same test to
/// each of them, optionally prefixed by a group marker (`and|Name,Title`).
/// `value` may pack several values (`a|b|c`) for set and range operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field: String,
    #[serde(default)]
    pub value: String,
    pub operator: QueryOperator,
    /// When true an empty or whitespace value drops the condition; when false
    /// `Equal`/`NotEqual` compare against null instead.
    #[serde(default = "default_skip_if_value_empty")]
    pub skip_if_value_empty: bool,
}

pub fn default_skip_if_value_empty() -> bool {
    true
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: QueryOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator,
            skip_if_value_empty: true,
        }
    }

    pub fn with_skip_if_value_empty(mut self, skip: bool) -> Self {
        self.skip_if_value_empty = skip;
        self
    }

    pub fn has_field(&self) -> bool {
        !self.field.trim().is_empty()
    }

    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Copy of this condition targeting a single field.
    pub fn for_field(&self, field: &str) -> Condition {
        Condition {
            field: field.to_string(),
            value: self.value.clone(),
            operator: self.operator,
            skip_if_value_empty: self.skip_if_value_empty,
        }
    }

    /// Resolves the group marker and the field list this condition targets.
    pub fn targets<'a>(&'a self, syntax: &ConditionSyntax) -> FieldTargets<'a> {
        let (join, rest) = strip_group_marker(&self.field, syntax.value_separator);

        if syntax.is_field_list(rest) {
            FieldTargets {
                join,
                fields: syntax.split_fields(rest).collect(),
                expanded: true,
            }
        } else {
            FieldTargets {
                join,
                fields: Some(rest.trim()).filter(|f| !f.is_empty()).into_iter().collect(),
                expanded: false,
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.field, self.operator, self.value)
    }
}

/// Logical connective for a multi-field condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupJoin {
    #[default]
    Or,
    And,
}

/// Fields a condition applies to, after the group marker is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTargets<'a> {
    pub join: GroupJoin,
    pub fields: Vec<&'a str>,
    /// True when the field was a separator-joined list, even if only one
    /// identifier survived the split.
    pub expanded: bool,
}

fn strip_group_marker(field: &str, marker_separator: char) -> (GroupJoin, &str) {
    if let Some((head, rest)) = field.split_once(marker_separator) {
        let head = head.trim();
        if head.eq_ignore_ascii_case("or") {
            return (GroupJoin::Or, rest);
        }
        if head.eq_ignore_ascii_case("and") {
            return (GroupJoin::And, rest);
        }
    }
    (GroupJoin::default(), field)
}
