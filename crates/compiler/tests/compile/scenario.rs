use crate::cond;
use compiler::compile_predicate;
use model::condition::{Condition, QueryOperator};

#[test]
fn test_end_to_end_scenario() {
    let conditions = vec![
        cond("Name", QueryOperator::NotEqual, "ObjectC"),
        cond(
            "CreationTime",
            QueryOperator::BetweenEqualStart,
            "2020-08-01|2020-08-20",
        ),
        cond("Name", QueryOperator::In, "TestA|TestB"),
    ];

    let compiled = compile_predicate(&conditions).unwrap();

    assert_eq!(
        compiled.expression(),
        "(Name != @0) and (CreationTime >= @1 and CreationTime < @2) and (Name == @3 or Name == @4)"
    );
    assert_eq!(
        compiled.arguments(),
        ["ObjectC", "2020-08-01", "2020-08-20", "TestA", "TestB"]
    );
}

#[test]
fn test_scenario_from_json_request() {
    let conditions: Vec<Condition> = serde_json::from_str(
        r#"[
            {"field": "Name", "operator": 1, "value": "ObjectC"},
            {"field": "CreationTime", "operator": 12, "value": "2020-08-01 00:00:00|2020-08-20 00:00:00"},
            {"field": "Name", "operator": "In", "value": "TestA|TestB"},
            {"field": "Description", "operator": 10, "value": ""},
            {"field": "CanNullVal", "operator": 0, "skipIfValueEmpty": false}
        ]"#,
    )
    .unwrap();

    let (expression, arguments) = compile_predicate(&conditions).unwrap().into_parts();

    assert_eq!(
        expression,
        "(Name != @0) and (CreationTime >= @1 and CreationTime < @2) and (Name == @3 or Name == @4) and (CanNullVal == null)"
    );
    assert_eq!(
        arguments,
        vec![
            "ObjectC",
            "2020-08-01 00:00:00",
            "2020-08-20 00:00:00",
            "TestA",
            "TestB"
        ]
    );
}
