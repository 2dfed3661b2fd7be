use compiler::compile_ordering;
use model::sort::{SortCondition, SortDirection};

#[test]
fn test_sort_stability() {
    let sorts = vec![
        SortCondition::new("a", 1, SortDirection::Ascending),
        SortCondition::new("b", 1, SortDirection::Descending),
        SortCondition::new("c", 0, SortDirection::Ascending),
    ];
    assert_eq!(compile_ordering(&sorts), "c asc ,a asc ,b desc");
}

#[test]
fn test_sort_from_json() {
    let sorts: Vec<SortCondition> = serde_json::from_str(
        r#"[
            {"field": "Name", "order": 2, "direction": 1},
            {"field": "Ignored", "order": 0, "direction": 0},
            {"field": "CreationTime", "order": 1, "direction": "Descending"}
        ]"#,
    )
    .unwrap();

    assert_eq!(compile_ordering(&sorts), "CreationTime desc ,Name asc");
}
