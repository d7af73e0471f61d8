use oprail::combinators::Split;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::Error;

#[test]
fn stops_at_the_first_failure_unlike_parallel() {
    let fail = Callable::params_only("fail", 0, |_| Error::code("blank").into());
    let ran = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let ran_clone = ran.clone();
    let never_runs = Callable::params_only("never_runs", 0, move |_| {
        ran_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        oprail::types::OrderedMap::new().into()
    });
    let pipeline = Split::new(vec![fail, never_runs]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
}
