use compiler::CompileError;
use model::error::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to compile filter: {0}")]
    Compile(#[from] CompileError),

    #[error("Invalid query model: {0}")]
    Model(#[from] ModelError),

    #[error("Failed to parse query request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("Failed to read settings file {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[source] serde_json::Error),
}

/// Who is responsible for a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request carried bad input; report it back as a validation failure.
    Client,
    /// Caller code or deployment is at fault.
    Internal,
}

impl QueryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            QueryError::Compile(CompileError::MalformedRangeValue { .. }) => ErrorClass::Client,
            QueryError::InvalidRequest(_) => ErrorClass::Client,
            QueryError::Model(_) => ErrorClass::Internal,
            QueryError::SettingsRead { .. } | QueryError::SettingsParse(_) => {
                ErrorClass::Internal
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::Client
    }
}
