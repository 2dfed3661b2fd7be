//! Defines the AST for filter predicates.
//!
//! Conditions are lowered into this tree before any text is produced, so the
//! target grammar only matters at render time.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String, // e.g. `Name` or `Owner.Name`
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `field <op> operand`
    Compare {
        field: Ident,
        op: CompareOp,
        operand: Operand,
    },

    /// String predicate with one bound argument, e.g. `field.StartsWith(@0)`.
    StringMatch {
        field: Ident,
        method: StringMethod,
        value: String,
    },

    /// Terms joined by one logical operator.
    Junction(Junction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    pub op: LogicalOp,
    pub terms: Vec<Predicate>,
    /// Wrap every term in parentheses when rendering.
    pub grouped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Bound positional argument.
    Param(String),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringMethod {
    StartsWith,
    EndsWith,
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl Predicate {
    pub fn compare(field: &str, op: CompareOp, value: &str) -> Self {
        Predicate::Compare {
            field: Ident::new(field),
            op,
            operand: Operand::Param(value.to_string()),
        }
    }

    pub fn compare_null(field: &str, op: CompareOp) -> Self {
        Predicate::Compare {
            field: Ident::new(field),
            op,
            operand: Operand::Null,
        }
    }

    pub fn string_match(field: &str, method: StringMethod, value: &str) -> Self {
        Predicate::StringMatch {
            field: Ident::new(field),
            method,
            value: value.to_string(),
        }
    }

    /// Terms rendered bare, e.g. the two bounds of a range.
    pub fn chain(op: LogicalOp, terms: Vec<Predicate>) -> Self {
        Predicate::Junction(Junction {
            op,
            terms,
            grouped: false,
        })
    }

    /// Terms rendered in their own parentheses.
    pub fn group(op: LogicalOp, terms: Vec<Predicate>) -> Self {
        Predicate::Junction(Junction {
            op,
            terms,
            grouped: true,
        })
    }
}
