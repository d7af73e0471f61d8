use oprail::combinators::Chain;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{Error, OrderedMap, Value};

#[test]
fn to_outcome_success_wraps_context() {
    let set_flag = Callable::context_only("set_flag", |_ctx| OrderedMap::new().with("ok", true).into());
    let result = set_flag.call(&[], &Context::new());
    let outcome = result.to_outcome();
    assert_eq!(outcome.unwrap().get(&"ok".into()), Some(&Value::Bool(true)));
}

#[test]
fn to_outcome_failure_wraps_errors() {
    let always_fails = Callable::params_only("always_fails", 0, |_| Error::code("blank").into());
    let result = always_fails.call(&[], &Context::new());
    let outcome = result.to_outcome();
    assert_eq!(outcome.unwrap_err().len(), 1);
}

#[test]
fn merge_concatenates_errors_in_order() {
    let fail_a = Callable::params_only("fail_a", 0, |_| Error::code("a").into());
    let fail_b = Callable::params_only("fail_b", 0, |_| Error::code("b").into());
    let pipeline = oprail::combinators::Fanout::new(vec![fail_a, fail_b]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    let codes: Vec<_> = result.errors().iter().map(|e| e.code_ref().unwrap()).collect();
    assert_eq!(codes, vec!["a", "b"]);
}

#[test]
fn chain_stops_after_first_failure() {
    let fails = Callable::params_only("fails", 0, |_| Error::code("blank").into());
    let never_runs = Callable::params_only("never_runs", 0, |_| {
        panic!("should not be invoked once the chain has already failed")
    });
    let pipeline = Chain::new(vec![fails, never_runs]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
}
