//! Applies compiled filters, orderings and pages to a query evaluator.

pub mod builder;
pub mod error;
pub mod plan;
pub mod request;
pub mod settings;
pub mod target;

pub use builder::QueryBuilder;
pub use error::{ErrorClass, QueryError};
pub use plan::QueryPlan;
pub use request::QueryRequest;
pub use settings::QuerySettings;
pub use target::QueryTarget;
