use oprail::context::Context;
use oprail::traits::{Component, ContextTypeCheck, OptionalTyped, Required};
use oprail::types::Value;
use oprail::validator::ContextValidator;
use std::sync::Arc;

fn required_entry(key: &'static str) -> (oprail::types::Key, Arc<dyn ContextTypeCheck>) {
    (key.into(), Arc::new(Required))
}

#[test]
fn required_key_missing_is_a_failure() {
    let pipeline = ContextValidator::new(vec![required_entry("user_id")]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_failure());
}

#[test]
fn optional_key_absent_is_fine_and_not_written_back() {
    let check: Arc<dyn ContextTypeCheck> =
        Arc::new(OptionalTyped::new("bool", |v| matches!(v, Value::Bool(_))));
    let pipeline = ContextValidator::new(vec![("flag".into(), check)]);
    let result = pipeline.call(&[], &Context::new());
    assert!(result.is_success());
    assert!(result.context().get(&"flag".into()).is_none());
}

#[test]
fn optional_key_of_the_wrong_type_fails() {
    let check: Arc<dyn ContextTypeCheck> =
        Arc::new(OptionalTyped::new("bool", |v| matches!(v, Value::Bool(_))));
    let pipeline = ContextValidator::new(vec![("flag".into(), check)]);
    let context = Context::new().with("flag", 1_i64);
    let result = pipeline.call(&[], &context);
    assert!(result.is_failure());
}

#[test]
#[should_panic]
fn raising_variant_panics_with_operation_failed_on_failure() {
    let pipeline = ContextValidator::raising(vec![required_entry("user_id")]);
    pipeline.call(&[], &Context::new());
}
