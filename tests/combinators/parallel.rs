use oprail::combinators::Parallel;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{Error, Value};

#[test]
fn distributes_disjoint_slices_by_arity() {
    let seen_first = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_second = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_first_clone = seen_first.clone();
    let seen_second_clone = seen_second.clone();

    let takes_two = Callable::params_only("takes_two", 2, move |params| {
        *seen_first_clone.lock().unwrap() = params.to_vec();
        oprail::types::OrderedMap::new().into()
    });
    let takes_one = Callable::params_only("takes_one", 1, move |params| {
        *seen_second_clone.lock().unwrap() = params.to_vec();
        oprail::types::OrderedMap::new().into()
    });

    let pipeline = Parallel::new(vec![takes_two, takes_one]);
    let params = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
    assert_eq!(*seen_first.lock().unwrap(), vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(*seen_second.lock().unwrap(), vec![Value::Int(3)]);
}

#[test]
fn every_child_still_runs_after_an_earlier_failure() {
    let fail = Callable::params_only("fail", 0, |_| Error::code("blank").into());
    let ran = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let ran_clone = ran.clone();
    let records = Callable::params_only("records", 0, move |_| {
        ran_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        oprail::types::OrderedMap::new().into()
    });
    let pipeline = Parallel::new(vec![fail, records]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    assert!(ran.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn single_param_is_fanned_out_to_every_child() {
    let echo_a = Callable::params_only("echo_a", 1, |params| Value::List(params.to_vec()).into());
    let echo_b = Callable::params_only("echo_b", 1, |params| Value::List(params.to_vec()).into());
    let pipeline = Parallel::new(vec![echo_a, echo_b]);
    let result = pipeline.call(&[Value::Int(9)], &Context::new());
    assert!(result.is_success());
}
