pub mod order;
pub mod predicate;
