use oprail::combinators::Either;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::Error;

#[test]
fn returns_the_first_successful_child() {
    let fails = Callable::params_only("fails", 0, |_| Error::code("blank").into());
    let succeeds = Callable::params_only("succeeds", 0, |_| oprail::types::OrderedMap::new().with("ok", true).into());
    let pipeline = Either::new(vec![fails, succeeds]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_success());
}

#[test]
fn returns_the_last_failure_when_every_child_fails() {
    let fails_a = Callable::params_only("fails_a", 0, |_| Error::code("a").into());
    let fails_b = Callable::params_only("fails_b", 0, |_| Error::code("b").into());
    let pipeline = Either::new(vec![fails_a, fails_b]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("b"));
}

#[test]
#[should_panic(expected = "at least one child")]
fn refuses_to_build_with_no_children() {
    let _ = Either::new(vec![]);
}
