use crate::{cond, placeholder_indices};
use compiler::compile_predicate;
use model::condition::{Condition, QueryOperator};

#[test]
fn test_placeholders_are_dense_and_ordered() {
    let conditions = vec![
        cond("A", QueryOperator::Equal, "1"),
        cond("B", QueryOperator::Equal, ""),
        cond("C,D", QueryOperator::In, "x|y"),
        Condition::new("E", QueryOperator::Equal, "").with_skip_if_value_empty(false),
        cond("F", QueryOperator::BetweenEqualEnd, "2|3"),
        cond("G", QueryOperator::NotIn, "p||q"),
        cond("", QueryOperator::Equal, "ignored"),
        cond("H", QueryOperator::StartsWith, "pre"),
    ];

    let compiled = compile_predicate(&conditions).unwrap();
    let indices = placeholder_indices(compiled.expression());
    let expected: Vec<usize> = (0..compiled.arguments().len()).collect();

    assert_eq!(indices, expected);
    assert_eq!(
        compiled.arguments(),
        ["1", "x", "y", "x", "y", "2", "3", "p", "q", "pre"]
    );
}

#[test]
fn test_every_operator_keeps_indices_dense() {
    let conditions: Vec<Condition> = QueryOperator::ALL
        .into_iter()
        .map(|op| {
            let value = if op.is_range() { "lo|hi" } else { "v1|v2" };
            cond("Field", op, value)
        })
        .collect();

    let compiled = compile_predicate(&conditions).unwrap();
    let indices = placeholder_indices(compiled.expression());

    assert_eq!(indices.len(), compiled.arguments().len());
    for (position, index) in indices.iter().enumerate() {
        assert_eq!(*index, position);
    }
}
