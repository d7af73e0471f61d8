use oprail::combinators::Chain;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{Error, OrderedMap, Value};

#[test]
fn each_step_sees_the_previous_steps_context() {
    let set_a = Callable::context_only("set_a", |_| OrderedMap::new().with("a", 1_i64).into());
    let read_a_set_b = Callable::context_only("read_a_set_b", |ctx| {
        let a = ctx.get(&"a".into()).and_then(Value::as_str);
        assert!(a.is_none(), "a is an int, not a string");
        OrderedMap::new().with("b", 2_i64).into()
    });
    let pipeline = Chain::new(vec![set_a, read_a_set_b]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_success());
    assert_eq!(result.context().get(&"a".into()), Some(&Value::Int(1)));
    assert_eq!(result.context().get(&"b".into()), Some(&Value::Int(2)));
}

#[test]
fn shortcut_step_stops_the_chain_without_failing() {
    let shortcut_step = oprail::combinators::Shortcut::new(Callable::params_only(
        "stop_here",
        0,
        |_| OrderedMap::new().into(),
    ));
    let never_runs =
        Callable::params_only("never_runs", 0, |_| panic!("chain should have shortcut before this"));
    let pipeline = Chain::new(vec![shortcut_step, never_runs]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(result.is_shortcut());
}

#[test]
fn empty_chain_is_an_empty_success() {
    let pipeline = Chain::new(vec![]);
    let result = pipeline.call(&[Value::Int(1)], &Context::new());
    assert!(result.is_success());
}

#[test]
fn failing_step_reports_its_own_error() {
    let fail = Callable::params_only("fail", 0, |_| Error::code("invalid").into());
    let pipeline = Chain::new(vec![fail]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("invalid"));
}
