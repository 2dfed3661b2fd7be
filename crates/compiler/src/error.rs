use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A range operator's value did not split into exactly two bounds.
    #[error("Incorrect number of filter values after splitting: {value}")]
    MalformedRangeValue { value: String },
}
