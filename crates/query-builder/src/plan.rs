use crate::target::QueryTarget;
use model::{pagination::PageWindow, predicate::CompiledPredicate};
use serde::Serialize;

/// A target that records what was applied, for callers that hand the pieces
/// to an evaluator themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    pub filter: Option<CompiledPredicate>,
    pub ordering: Option<String>,
    pub page: Option<PageWindow>,
}

impl QueryTarget for QueryPlan {
    fn apply_filter(mut self, predicate: CompiledPredicate) -> Self {
        self.filter = Some(predicate);
        self
    }

    fn apply_sort(mut self, ordering: String) -> Self {
        self.ordering = Some(ordering);
        self
    }

    fn apply_page(mut self, window: PageWindow) -> Self {
        self.page = Some(window);
        self
    }
}
