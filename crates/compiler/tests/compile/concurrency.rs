use crate::cond;
use compiler::PredicateCompiler;
use model::condition::QueryOperator;
use std::{sync::Arc, thread};

#[test]
fn test_shared_compiler_across_threads() {
    let compiler = Arc::new(PredicateCompiler::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let compiler = Arc::clone(&compiler);
            thread::spawn(move || {
                let value = format!("v{i}|w{i}");
                let compiled = compiler
                    .compile(&[
                        cond("A", QueryOperator::Equal, &i.to_string()),
                        cond("B", QueryOperator::In, &value),
                    ])
                    .unwrap();
                (i, compiled)
            })
        })
        .collect();

    for handle in handles {
        let (i, compiled) = handle.join().unwrap();
        assert_eq!(compiled.expression(), "(A == @0) and (B == @1 or B == @2)");
        assert_eq!(
            compiled.arguments(),
            [i.to_string(), format!("v{i}"), format!("w{i}")]
        );
    }
}
