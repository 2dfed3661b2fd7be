use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Filter operators understood by the predicate compiler.
///
/// The discriminants are the wire codes clients send, so they must never be
/// renumbered. On the wire an operator is written as its code and read back
/// from either the code or the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OperatorRepr", into = "u8")]
#[repr(u8)]
pub enum QueryOperator {
    Equal = 0,
    NotEqual = 1,
    Greater = 2,
    GreaterEqual = 3,
    Less = 4,
    LessEqual = 5,
    StartsWith = 6,
    EndsWith = 7,
    /// Matches any of the `|`-separated values.
    In = 8,
    /// Matches none of the `|`-separated values.
    NotIn = 9,
    Contains = 10,
    /// Exclusive on both bounds.
    Between = 11,
    /// Inclusive lower bound, exclusive upper bound.
    BetweenEqualStart = 12,
    /// Exclusive lower bound, inclusive upper bound.
    BetweenEqualEnd = 13,
    /// Inclusive on both bounds.
    BetweenEqualStartAndEnd = 14,
}

impl QueryOperator {
    pub const ALL: [QueryOperator; 15] = [
        QueryOperator::Equal,
        QueryOperator::NotEqual,
        QueryOperator::Greater,
        QueryOperator::GreaterEqual,
        QueryOperator::Less,
        QueryOperator::LessEqual,
        QueryOperator::StartsWith,
        QueryOperator::EndsWith,
        QueryOperator::In,
        QueryOperator::NotIn,
        QueryOperator::Contains,
        QueryOperator::Between,
        QueryOperator::BetweenEqualStart,
        QueryOperator::BetweenEqualEnd,
        QueryOperator::BetweenEqualStartAndEnd,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            QueryOperator::Equal => "Equal",
            QueryOperator::NotEqual => "NotEqual",
            QueryOperator::Greater => "Greater",
            QueryOperator::GreaterEqual => "GreaterEqual",
            QueryOperator::Less => "Less",
            QueryOperator::LessEqual => "LessEqual",
            QueryOperator::StartsWith => "StartsWith",
            QueryOperator::EndsWith => "EndsWith",
            QueryOperator::In => "In",
            QueryOperator::NotIn => "NotIn",
            QueryOperator::Contains => "Contains",
            QueryOperator::Between => "Between",
            QueryOperator::BetweenEqualStart => "BetweenEqualStart",
            QueryOperator::BetweenEqualEnd => "BetweenEqualEnd",
            QueryOperator::BetweenEqualStartAndEnd => "BetweenEqualStartAndEnd",
        }
    }

    /// Range operators whose value must split into exactly two bounds.
    pub fn is_range(self) -> bool {
        matches!(
            self,
            QueryOperator::Between
                | QueryOperator::BetweenEqualStart
                | QueryOperator::BetweenEqualEnd
                | QueryOperator::BetweenEqualStartAndEnd
        )
    }
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<QueryOperator> for u8 {
    fn from(op: QueryOperator) -> Self {
        op.code()
    }
}

impl TryFrom<u8> for QueryOperator {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        QueryOperator::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ModelError::UnsupportedOperator(code.to_string()))
    }
}

impl FromStr for QueryOperator {
    type Err = ModelError;

    /// Accepts the variant name in any case, with or without underscores
    /// (`NotIn`, `not_in`, `notin`), or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return QueryOperator::try_from(code);
        }

        let wanted = normalize_name(trimmed);
        QueryOperator::ALL
            .into_iter()
            .find(|op| normalize_name(op.name()) == wanted)
            .ok_or_else(|| ModelError::UnsupportedOperator(s.to_string()))
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Operator as it appears on the wire, before the code or name is checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OperatorRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<OperatorRepr> for QueryOperator {
    type Error = ModelError;

    fn try_from(repr: OperatorRepr) -> Result<Self, Self::Error> {
        match repr {
            OperatorRepr::Code(code) => u8::try_from(code)
                .map_err(|_| ModelError::UnsupportedOperator(code.to_string()))
                .and_then(QueryOperator::try_from),
            OperatorRepr::Name(name) => name.parse(),
        }
    }
}
