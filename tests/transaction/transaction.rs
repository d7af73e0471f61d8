use crate::support::LoggingTransactionManager;
use oprail::combinators::Chain;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::transaction::TransactionBuilder;
use oprail::types::{Error, OrderedMap, Value};
use std::sync::{Arc, Mutex};

#[test]
fn commits_on_success_and_runs_on_success_callbacks() {
    let db = LoggingTransactionManager::new();
    let child = Callable::params_only("child", 0, |_| OrderedMap::new().with("order_id", 1_i64).into());
    let saw_params = Arc::new(Mutex::new(Vec::new()));
    let saw_params_clone = saw_params.clone();
    let notify = Callable::params_and_context("notify", 0, move |params, _ctx| {
        *saw_params_clone.lock().unwrap() = params.to_vec();
        OrderedMap::new().into()
    });

    let pipeline = TransactionBuilder::new(Arc::new(db.clone()), child).on_success(vec![notify]).build();
    let result = pipeline.call(&[], &Context::new());

    assert!(result.is_success());
    assert_eq!(db.events(), vec!["begin", "commit"]);
    assert_eq!(result.on_success().len(), 1);
    result.on_success()[0].join();
}

#[test]
fn rolls_back_on_failure_and_runs_on_failure_callbacks() {
    let db = LoggingTransactionManager::new();
    let child = Callable::params_only("child", 0, |_| Error::code("blank").into());
    let on_failure_ran = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let on_failure_ran_clone = on_failure_ran.clone();
    let notify_failure = Callable::params_and_context("notify_failure", 0, move |_, _| {
        on_failure_ran_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        OrderedMap::new().into()
    });

    let pipeline =
        TransactionBuilder::new(Arc::new(db.clone()), child).on_failure(vec![notify_failure]).build();
    let result = pipeline.call(&[], &Context::new());

    assert!(result.is_failure());
    assert_eq!(db.events(), vec!["begin", "rollback"]);
    assert!(on_failure_ran.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn legacy_single_arg_no_context_failure_callback_receives_whole_result_as_one_value() {
    let db = LoggingTransactionManager::new();
    let child = Callable::params_only("child", 0, |_| Error::code("blank").into());
    let received = Arc::new(Mutex::new(None));
    let received_clone = received.clone();
    let legacy_callback = Callable::params_only("legacy_callback", 1, move |params| {
        *received_clone.lock().unwrap() = Some(params[0].clone());
        OrderedMap::new().into()
    });

    let pipeline =
        TransactionBuilder::new(Arc::new(db), child).on_failure(vec![legacy_callback]).build();
    pipeline.call(&[], &Context::new());

    let received = received.lock().unwrap();
    match received.as_ref() {
        Some(Value::Entity(_)) => {}
        other => panic!("expected the whole child result wrapped as an entity, got {other:?}"),
    }
}

#[test]
fn a_shortcutting_child_commits_without_running_any_callback() {
    let db = LoggingTransactionManager::new();
    let shortcut_child = oprail::combinators::Shortcut::new(Callable::params_only("inner", 0, |_| {
        OrderedMap::new().into()
    }));
    let callback_ran = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let callback_ran_clone = callback_ran.clone();
    let callback = Callable::params_and_context("callback", 0, move |_, _| {
        callback_ran_clone.store(true, std::sync::atomic::Ordering::SeqCst);
        OrderedMap::new().into()
    });

    let pipeline =
        TransactionBuilder::new(Arc::new(db.clone()), shortcut_child).on_success(vec![callback]).build();
    let result = pipeline.call(&[], &Context::new());

    assert!(result.is_success());
    assert!(result.is_shortcut());
    assert_eq!(db.events(), vec!["begin", "commit"]);
    assert!(!callback_ran.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn chained_inside_a_larger_pipeline_still_rolls_back_only_its_own_scope() {
    let db = LoggingTransactionManager::new();
    let child = Callable::params_only("child", 0, |_| Error::code("blank").into());
    let transaction = TransactionBuilder::new(Arc::new(db.clone()), child).build();
    let pipeline = Chain::new(vec![transaction]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
    assert_eq!(db.events(), vec!["begin", "rollback"]);
}
