use crate::{
    error::QueryError, plan::QueryPlan, request::QueryRequest, settings::QuerySettings,
    target::QueryTarget,
};
use compiler::{PredicateCompiler, SortCompiler};
use model::{condition::Condition, pagination::PageRequest, sort::SortCondition};
use tracing::{debug, info};

/// Compiles request parts and hands them to a [`QueryTarget`].
///
/// Holds no per-query state, so one builder can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    predicates: PredicateCompiler,
    sorts: SortCompiler,
}

impl QueryBuilder {
    pub fn new(settings: &QuerySettings) -> Self {
        let dialect = settings.dialect.dialect();
        Self {
            predicates: PredicateCompiler::new(settings.syntax, dialect.clone()),
            sorts: SortCompiler::new(dialect),
        }
    }

    /// Filters `target` by the conjunction of `conditions`. An empty result
    /// leaves the target untouched.
    pub fn apply_filter<T: QueryTarget>(
        &self,
        target: T,
        conditions: &[Condition],
    ) -> Result<T, QueryError> {
        let predicate = self.predicates.compile(conditions)?;
        if predicate.is_empty() {
            debug!("No effective conditions, filter skipped");
            return Ok(target);
        }

        debug!(
            expression = predicate.expression(),
            arguments = predicate.arguments().len(),
            "Applying filter"
        );
        Ok(target.apply_filter(predicate))
    }

    /// Orders `target` by the active sort conditions. An empty ordering
    /// leaves the target untouched.
    pub fn apply_sort<T: QueryTarget>(&self, target: T, sorts: &[SortCondition]) -> T {
        let ordering = self.sorts.compile(sorts);
        if ordering.is_empty() {
            debug!("No active sorts, ordering skipped");
            return target;
        }

        debug!(ordering = %ordering, "Applying ordering");
        target.apply_sort(ordering)
    }

    pub fn apply_page<T: QueryTarget>(&self, target: T, page: PageRequest) -> T {
        let window = page.window();
        debug!(offset = window.offset, limit = window.limit, "Applying page");
        target.apply_page(window)
    }

    /// Applies filter, then ordering, then the page window.
    pub fn apply<T: QueryTarget>(&self, target: T, request: &QueryRequest) -> Result<T, QueryError> {
        let target = self.apply_filter(target, &request.conditions)?;
        let target = self.apply_sort(target, &request.sorts);
        let target = match request.page {
            Some(page) => self.apply_page(target, page),
            None => target,
        };

        info!(
            conditions = request.conditions.len(),
            sorts = request.sorts.len(),
            paged = request.page.is_some(),
            "Query request applied"
        );
        Ok(target)
    }

    pub fn plan(&self, request: &QueryRequest) -> Result<QueryPlan, QueryError> {
        self.apply(QueryPlan::default(), request)
    }
}
