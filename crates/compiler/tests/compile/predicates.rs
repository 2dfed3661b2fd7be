use crate::cond;
use compiler::{CompileError, compile_predicate};
use model::condition::{Condition, QueryOperator};

#[test]
fn test_all_blank_fields_compile_to_nothing() {
    let conditions = vec![
        cond("", QueryOperator::Equal, "a"),
        cond("   ", QueryOperator::In, "a|b"),
        cond("\t", QueryOperator::Between, "1"),
    ];

    let compiled = compile_predicate(&conditions).unwrap();
    assert!(compiled.is_empty());
    assert_eq!(compiled.expression(), "");
    assert!(compiled.arguments().is_empty());
}

#[test]
fn test_no_conditions_compile_to_nothing() {
    let compiled = compile_predicate(&[]).unwrap();
    assert!(compiled.is_empty());
}

#[test]
fn test_skipped_empty_values_contribute_nothing() {
    for op in QueryOperator::ALL {
        for value in ["", " ", "\t\n"] {
            let conditions = vec![
                cond("Kept", QueryOperator::Equal, "k"),
                cond("Skipped", op, value),
            ];
            let compiled = compile_predicate(&conditions).unwrap();
            assert_eq!(compiled.expression(), "(Kept == @0)", "operator {op}");
            assert_eq!(compiled.arguments(), ["k"]);
        }
    }
}

#[test]
fn test_empty_value_without_skip_compares_to_null() {
    let equal = Condition::new("Deleted", QueryOperator::Equal, "").with_skip_if_value_empty(false);
    let compiled = compile_predicate(&[equal]).unwrap();
    assert_eq!(compiled.expression(), "(Deleted == null)");
    assert!(compiled.arguments().is_empty());

    let not_equal =
        Condition::new("Deleted", QueryOperator::NotEqual, " ").with_skip_if_value_empty(false);
    let compiled = compile_predicate(&[not_equal]).unwrap();
    assert_eq!(compiled.expression(), "(Deleted != null)");
    assert!(compiled.arguments().is_empty());
}

#[test]
fn test_empty_value_without_skip_drops_other_operators() {
    for op in QueryOperator::ALL
        .into_iter()
        .filter(|op| !matches!(op, QueryOperator::Equal | QueryOperator::NotEqual))
    {
        let condition = Condition::new("Age", op, "").with_skip_if_value_empty(false);
        let compiled = compile_predicate(&[condition]).unwrap();
        assert!(compiled.is_empty(), "operator {op}");
    }
}

#[test]
fn test_between_splits_two_bounds() {
    let compiled = compile_predicate(&[cond("field", QueryOperator::Between, "5|10")]).unwrap();
    assert_eq!(compiled.expression(), "(field > @0 and field < @1)");
    assert_eq!(compiled.arguments(), ["5", "10"]);
}

#[test]
fn test_between_family_rejects_missing_bounds() {
    let ops = [
        QueryOperator::Between,
        QueryOperator::BetweenEqualStart,
        QueryOperator::BetweenEqualEnd,
        QueryOperator::BetweenEqualStartAndEnd,
    ];

    for op in ops {
        for value in ["5", "|", "5||"] {
            let result = compile_predicate(&[cond("field", op, value)]);
            assert_eq!(
                result,
                Err(CompileError::MalformedRangeValue {
                    value: value.to_string()
                }),
                "operator {op} value {value:?}"
            );
        }
    }
}

#[test]
fn test_malformed_range_fails_whole_compile() {
    let conditions = vec![
        cond("Name", QueryOperator::Equal, "x"),
        cond("Age", QueryOperator::BetweenEqualEnd, "1|2|3"),
    ];
    assert!(compile_predicate(&conditions).is_err());
}

#[test]
fn test_in_not_in_duality() {
    let any_of = compile_predicate(&[cond("Tag", QueryOperator::In, "a|b|c")]).unwrap();
    let none_of = compile_predicate(&[cond("Tag", QueryOperator::NotIn, "a|b|c")]).unwrap();

    let rewritten = any_of.expression().replace("==", "!=").replace(" or ", " and ");
    assert_eq!(rewritten, none_of.expression());
    assert_eq!(any_of.arguments(), none_of.arguments());
}

#[test]
fn test_not_in_single_value() {
    let compiled = compile_predicate(&[cond("Tag", QueryOperator::NotIn, "a")]).unwrap();
    assert_eq!(compiled.expression(), "(Tag != @0)");
    assert_eq!(compiled.arguments(), ["a"]);
}

#[test]
fn test_multi_field_or_expansion() {
    let compiled = compile_predicate(&[cond("x,y", QueryOperator::Equal, "v")]).unwrap();
    assert_eq!(compiled.expression(), "((x == @0) or (y == @1))");
    assert_eq!(compiled.arguments(), ["v", "v"]);
}

#[test]
fn test_multi_field_and_marker() {
    let compiled =
        compile_predicate(&[cond("and|Name,Title", QueryOperator::Contains, "rust")]).unwrap();
    assert_eq!(
        compiled.expression(),
        "((Name.Contains(@0)) and (Title.Contains(@1)))"
    );
    assert_eq!(compiled.arguments(), ["rust", "rust"]);
}

#[test]
fn test_multi_field_range() {
    let compiled =
        compile_predicate(&[cond("Start,End", QueryOperator::BetweenEqualStartAndEnd, "1|9")])
            .unwrap();
    assert_eq!(
        compiled.expression(),
        "((Start >= @0 and Start <= @1) or (End >= @2 and End <= @3))"
    );
    assert_eq!(compiled.arguments(), ["1", "9", "1", "9"]);
}
