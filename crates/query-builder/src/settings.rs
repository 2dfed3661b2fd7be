use crate::error::QueryError;
use compiler::DialectKind;
use model::syntax::ConditionSyntax;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Compiler configuration: separator characters and target grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySettings {
    pub syntax: ConditionSyntax,
    pub dialect: DialectKind,
}

impl QuerySettings {
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        let settings: QuerySettings =
            serde_json::from_str(json).map_err(QueryError::SettingsParse)?;
        settings.syntax.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| QueryError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            dialect = ?settings.dialect,
            "Loaded query settings"
        );
        Ok(settings)
    }
}
