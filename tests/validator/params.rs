use crate::support::RequireNonEmpty;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{OrderedMap, Value};
use oprail::validator::ParamsValidator;
use std::sync::Arc;

#[test]
fn passes_through_validated_input() {
    let pipeline = ParamsValidator::new(Arc::new(RequireNonEmpty("title".into())));
    let params = vec![Value::Map(OrderedMap::new().with("title", "Hello"))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
}

#[test]
fn schema_failure_surfaces_as_a_pipeline_error() {
    let pipeline = ParamsValidator::new(Arc::new(RequireNonEmpty("title".into())));
    let params = vec![Value::Map(OrderedMap::new().with("title", ""))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("blank"));
}

#[test]
fn optional_with_empty_input_skips_the_schema() {
    let pipeline = ParamsValidator::optional(Arc::new(RequireNonEmpty("title".into())));
    let result = pipeline.call(&[Value::Map(OrderedMap::new())], &Context::new());
    assert!(result.is_success());
}
