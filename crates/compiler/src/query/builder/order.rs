//! Builds ordering clauses from sort conditions.

use crate::query::{
    ast::{
        order::{OrderByExpr, OrderDir, Ordering},
        predicate::Ident,
    },
    dialect::{Dialect, DynamicLinq},
    renderer::{Render, Renderer},
};
use model::sort::{SortCondition, SortDirection};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct SortCompiler {
    dialect: Arc<dyn Dialect>,
}

impl Default for SortCompiler {
    fn default() -> Self {
        Self::new(Arc::new(DynamicLinq))
    }
}

impl std::fmt::Debug for SortCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortCompiler")
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl SortCompiler {
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self { dialect }
    }

    /// Renders the ordering clause; empty text means no ordering requested.
    pub fn compile(&self, sorts: &[SortCondition]) -> String {
        let ordering = self.lower(sorts);
        if ordering.is_empty() {
            return String::new();
        }

        let mut renderer = Renderer::new(self.dialect.as_ref());
        ordering.render(&mut renderer);
        let (clause, _) = renderer.finish();

        debug!(keys = ordering.keys.len(), %clause, "Compiled ordering clause");
        clause
    }

    /// Drops `NoSort` entries and orders the rest by priority. The sort is
    /// stable, so equal priorities keep their input order.
    pub fn lower(&self, sorts: &[SortCondition]) -> Ordering {
        let mut active: Vec<&SortCondition> = sorts.iter().filter(|s| s.is_active()).collect();
        active.sort_by_key(|s| s.order);

        let keys = active
            .into_iter()
            .filter_map(|s| {
                let direction = match s.direction {
                    SortDirection::Ascending => OrderDir::Asc,
                    SortDirection::Descending => OrderDir::Desc,
                    SortDirection::NoSort => return None,
                };
                Some(OrderByExpr {
                    field: Ident::new(s.field.as_str()),
                    direction,
                })
            })
            .collect();

        Ordering { keys }
    }
}
