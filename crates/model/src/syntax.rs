use crate::error::ModelError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_SEPARATOR: char = ',';
pub const DEFAULT_VALUE_SEPARATOR: char = '|';

/// Reserved characters used to pack several fields or several values into
/// one condition.
///
/// The value separator also terminates the group marker at the start of a
/// multi-field list (`or|a,b`, `and|a,b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionSyntax {
    pub field_separator: char,
    pub value_separator: char,
}

impl Default for ConditionSyntax {
    fn default() -> Self {
        Self {
            field_separator: DEFAULT_FIELD_SEPARATOR,
            value_separator: DEFAULT_VALUE_SEPARATOR,
        }
    }
}

impl ConditionSyntax {
    pub fn new(field_separator: char, value_separator: char) -> Result<Self, ModelError> {
        let syntax = Self {
            field_separator,
            value_separator,
        };
        syntax.validate()?;
        Ok(syntax)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.field_separator == self.value_separator {
            return Err(ModelError::InvalidSyntax(format!(
                "field and value separators must differ, both are '{}'",
                self.field_separator
            )));
        }

        for (name, sep) in [
            ("field", self.field_separator),
            ("value", self.value_separator),
        ] {
            if sep.is_whitespace() || sep.is_alphanumeric() || sep == '_' || sep == '.' {
                return Err(ModelError::InvalidSyntax(format!(
                    "{name} separator '{sep}' collides with identifier or value characters"
                )));
            }
        }

        Ok(())
    }

    /// Splits a packed value, dropping empty entries. Whitespace-only entries
    /// are kept as given.
    pub fn split_values<'a>(&self, value: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let sep = self.value_separator;
        value.split(sep).filter(|v| !v.is_empty())
    }

    /// Splits a field list into trimmed, non-empty identifiers.
    pub fn split_fields<'a>(&self, fields: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let sep = self.field_separator;
        fields.split(sep).map(str::trim).filter(|f| !f.is_empty())
    }

    pub fn is_field_list(&self, field: &str) -> bool {
        field.contains(self.field_separator)
    }
}
