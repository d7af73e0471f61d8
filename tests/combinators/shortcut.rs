use oprail::combinators::Shortcut;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::Error;

#[test]
fn success_sets_shortcut_to_the_wrapped_child() {
    let inner = Callable::params_only("inner", 0, |_| oprail::types::OrderedMap::new().into());
    let wrapped = Shortcut::new(inner);
    let result = wrapped.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(result.is_shortcut());
}

#[test]
fn failure_is_swallowed_into_an_empty_non_shortcut_success() {
    let inner = Callable::params_only("inner", 0, |_| Error::code("blank").into());
    let wrapped = Shortcut::new(inner);
    let result = wrapped.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(!result.is_shortcut());
}
