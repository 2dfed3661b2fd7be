use query_builder::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Invalid dialect provided: {0}")]
    InvalidDialect(String),
}
