use crate::{condition::operator::normalize_name, error::ModelError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Sort direction; the discriminants are wire codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DirectionRepr", into = "u8")]
#[repr(u8)]
pub enum SortDirection {
    /// Excluded from the ordering clause.
    #[default]
    NoSort = 0,
    Ascending = 1,
    Descending = 2,
}

impl SortDirection {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::NoSort => write!(f, "NoSort"),
            SortDirection::Ascending => write!(f, "Ascending"),
            SortDirection::Descending => write!(f, "Descending"),
        }
    }
}

impl From<SortDirection> for u8 {
    fn from(dir: SortDirection) -> Self {
        dir.code()
    }
}

impl TryFrom<u8> for SortDirection {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SortDirection::NoSort),
            1 => Ok(SortDirection::Ascending),
            2 => Ok(SortDirection::Descending),
            other => Err(ModelError::UnsupportedDirection(other.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s.trim()).as_str() {
            "0" | "nosort" | "none" => Ok(SortDirection::NoSort),
            "1" | "ascending" | "asc" => Ok(SortDirection::Ascending),
            "2" | "descending" | "desc" => Ok(SortDirection::Descending),
            _ => Err(ModelError::UnsupportedDirection(s.to_string())),
        }
    }
}

/// Direction as it appears on the wire, before the code or name is checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DirectionRepr {
    Code(u64),
    Name(String),
}

impl TryFrom<DirectionRepr> for SortDirection {
    type Error = ModelError;

    fn try_from(repr: DirectionRepr) -> Result<Self, Self::Error> {
        match repr {
            DirectionRepr::Code(code) => u8::try_from(code)
                .map_err(|_| ModelError::UnsupportedDirection(code.to_string()))
                .and_then(SortDirection::try_from),
            DirectionRepr::Name(name) => name.parse(),
        }
    }
}

/// One field-level ordering rule. Lower `order` sorts first; equal orders
/// keep their input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCondition {
    pub field: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default, alias = "type")]
    pub direction: SortDirection,
}

impl SortCondition {
    pub fn new(field: impl Into<String>, order: i32, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            order,
            direction,
        }
    }

    pub fn asc(field: impl Into<String>, order: i32) -> Self {
        Self::new(field, order, SortDirection::Ascending)
    }

    pub fn desc(field: impl Into<String>, order: i32) -> Self {
        Self::new(field, order, SortDirection::Descending)
    }

    pub fn is_active(&self) -> bool {
        self.direction != SortDirection::NoSort
    }
}
