use model::{pagination::PageWindow, predicate::CompiledPredicate};

/// The evaluator boundary: something that accepts a string predicate with
/// its arguments, an ordering clause and a skip/take window.
///
/// Methods take and return the target by value so implementations can wrap
/// immutable query objects.
pub trait QueryTarget: Sized {
    /// Receives a non-empty predicate; expression and arguments arrive together.
    fn apply_filter(self, predicate: CompiledPredicate) -> Self;

    /// Receives a non-empty ordering clause.
    fn apply_sort(self, ordering: String) -> Self;

    fn apply_page(self, window: PageWindow) -> Self;
}
