use oprail::combinators::{Chain, Optional};
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::Error;

#[test]
fn swallows_a_failure_into_an_empty_success() {
    let fails = Callable::params_only("fails", 0, |_| Error::code("blank").into());
    let wrapped = Optional::new(fails);
    let result = wrapped.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(!result.is_shortcut());
}

#[test]
fn chain_keeps_going_after_an_optional_failure() {
    let fails = Callable::params_only("fails", 0, |_| Error::code("blank").into());
    let next_ran = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let next_ran_clone = next_ran.clone();
    let next = Callable::params_only("next", 0, move |_| {
        next_ran_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        oprail::types::OrderedMap::new().into()
    });
    let pipeline = Chain::new(vec![Optional::new(fails), next]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(next_ran.load(std::sync::atomic::Ordering::SeqCst));
}
