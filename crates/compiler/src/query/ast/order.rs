//! AST for ordering clauses.

use super::predicate::Ident;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpr {
    pub field: Ident,
    pub direction: OrderDir,
}

/// Ordered list of sort keys, highest priority first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ordering {
    pub keys: Vec<OrderByExpr>,
}

impl Ordering {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
