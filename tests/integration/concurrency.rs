//! A compiled spec shared across threads

use std::thread;

use argspec::{CompiledSpec, Error, Matcher, ParseResult, Value, compile};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<CompiledSpec>();
    assert_send_sync::<ParseResult>();
    assert_send_sync::<Error>();
    assert_send_sync::<Matcher<'static>>();
}

#[test]
fn concurrent_matches_share_one_spec() {
    let spec = compile("[--id Int10] String*").unwrap();
    let before = spec.clone();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8i64)
            .map(|n| {
                let spec = &spec;
                scope.spawn(move || {
                    let id = n.to_string();
                    let word = format!("w{n}");
                    let result = Matcher::new(spec).match_args(["--id", id.as_str(), word.as_str()]);
                    (n, result)
                })
            })
            .collect();

        for handle in handles {
            let (n, result) = handle.join().unwrap();
            let result = result.unwrap();
            assert_eq!(result.get("--id"), Some(&Value::Int(n)));
            assert_eq!(result.rest, vec![Value::String(format!("w{n}"))]);
        }
    });

    assert_eq!(spec, before);
}
