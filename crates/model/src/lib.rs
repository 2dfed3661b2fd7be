pub mod condition;
pub mod error;
pub mod pagination;
pub mod predicate;
pub mod sort;
pub mod syntax;
