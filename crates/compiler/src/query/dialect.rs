//! Defines the `Dialect` trait for the textual grammar a predicate is
//! rendered into.

use crate::query::{
    ast::{
        order::OrderDir,
        predicate::{CompareOp, Ident, LogicalOp, StringMethod},
    },
    renderer::Renderer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect (e.g., "DynamicLinq", "PostgreSQL").
    fn name(&self) -> &'static str;

    /// Renders a field identifier.
    ///
    /// - Dynamic LINQ takes member paths as written: `Owner.Name`
    /// - PostgreSQL quotes each segment: `"Owner"."Name"`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a zero-based argument index.
    ///
    /// - Dynamic LINQ uses `@0`, `@1`, etc.
    /// - PostgreSQL uses `$1`, `$2`, etc.
    fn placeholder(&self, index: usize) -> String;

    fn compare_operator(&self, op: CompareOp) -> &'static str;

    /// Renders the comparison of a field against null.
    fn null_comparison(&self, field: &str, op: CompareOp) -> String;

    /// Renders a string predicate, binding `value` as one argument.
    fn render_string_match(
        &self,
        r: &mut Renderer,
        field: &Ident,
        method: StringMethod,
        value: &str,
    );

    fn logical_operator(&self, op: LogicalOp) -> &'static str;

    fn sort_direction(&self, dir: OrderDir) -> &'static str;

    /// Separator between keys of an ordering clause.
    fn sort_separator(&self) -> &'static str;
}

/// Grammar of `System.Linq.Dynamic.Core` string expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicLinq;

impl Dialect for DynamicLinq {
    fn name(&self) -> &'static str {
        "DynamicLinq"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn placeholder(&self, index: usize) -> String {
        format!("@{index}")
    }

    fn compare_operator(&self, op: CompareOp) -> &'static str {
        match op {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
        }
    }

    fn null_comparison(&self, field: &str, op: CompareOp) -> String {
        format!("{field} {} null", self.compare_operator(op))
    }

    fn render_string_match(
        &self,
        r: &mut Renderer,
        field: &Ident,
        method: StringMethod,
        value: &str,
    ) {
        let method_name = match method {
            StringMethod::StartsWith => "StartsWith",
            StringMethod::EndsWith => "EndsWith",
            StringMethod::Contains => "Contains",
        };
        r.push_identifier(field);
        r.push_str(&format!(".{method_name}("));
        r.add_argument(value.to_string());
        r.push_str(")");
    }

    fn logical_operator(&self, op: LogicalOp) -> &'static str {
        match op {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }

    fn sort_direction(&self, dir: OrderDir) -> &'static str {
        match dir {
            OrderDir::Asc => "asc",
            OrderDir::Desc => "desc",
        }
    }

    fn sort_separator(&self) -> &'static str {
        " ,"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        ident
            .split('.')
            .map(|segment| format!(r#""{}""#, segment.replace('"', r#""""#)))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn compare_operator(&self, op: CompareOp) -> &'static str {
        match op {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
        }
    }

    fn null_comparison(&self, field: &str, op: CompareOp) -> String {
        match op {
            CompareOp::Eq => format!("{field} IS NULL"),
            CompareOp::NotEq => format!("{field} IS NOT NULL"),
            other => format!("{field} {} NULL", self.compare_operator(other)),
        }
    }

    fn render_string_match(
        &self,
        r: &mut Renderer,
        field: &Ident,
        method: StringMethod,
        value: &str,
    ) {
        let escaped = escape_like_pattern(value);
        let pattern = match method {
            StringMethod::StartsWith => format!("{escaped}%"),
            StringMethod::EndsWith => format!("%{escaped}"),
            StringMethod::Contains => format!("%{escaped}%"),
        };
        r.push_identifier(field);
        r.push_str(" LIKE ");
        r.add_argument(pattern);
        r.push_str(r" ESCAPE '\'");
    }

    fn logical_operator(&self, op: LogicalOp) -> &'static str {
        match op {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }

    fn sort_direction(&self, dir: OrderDir) -> &'static str {
        match dir {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }

    fn sort_separator(&self) -> &'static str {
        ", "
    }
}

/// Escape LIKE metacharacters (`%`, `_`, `\`) in user input.
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Serializable selector for the built-in dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialectKind {
    #[default]
    DynamicLinq,
    Postgres,
}

impl DialectKind {
    pub fn dialect(self) -> Arc<dyn Dialect> {
        match self {
            DialectKind::DynamicLinq => Arc::new(DynamicLinq),
            DialectKind::Postgres => Arc::new(Postgres),
        }
    }
}

impl std::str::FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamiclinq" | "dynamic-linq" | "linq" => Ok(DialectKind::DynamicLinq),
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}
