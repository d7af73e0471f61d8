use crate::support::MapRepository;
use oprail::context::Context;
use oprail::lookup::{FindOneBuilder, RepositorySource};
use oprail::traits::Component;
use oprail::types::{OrderedMap, Value};
use std::sync::Arc;

fn account(id: i64) -> OrderedMap {
    OrderedMap::new().with("id", id).with("name", "acme")
}

#[test]
fn resolves_entity_by_default_id_column_into_context() {
    let repo = MapRepository::new(vec![account(7)]);
    let pipeline = FindOneBuilder::new("account", RepositorySource::Single(Arc::new(repo))).build();

    let params = vec![Value::Map(OrderedMap::new().with("account_id", 7_i64))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
    assert!(result.context().get(&"account".into()).is_some());
}

#[test]
fn missing_id_field_fails_with_missing_code() {
    let repo = MapRepository::new(vec![account(7)]);
    let pipeline = FindOneBuilder::new("account", RepositorySource::Single(Arc::new(repo))).build();

    let params = vec![Value::Map(OrderedMap::new())];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("missing"));
}

#[test]
fn unresolvable_id_fails_with_not_found_unless_skippable() {
    let repo = MapRepository::new(vec![account(7)]);
    let params = vec![Value::Map(OrderedMap::new().with("account_id", 99_i64))];

    let strict = FindOneBuilder::new("account", RepositorySource::Single(Arc::new(MapRepository::new(vec![account(7)])))).build();
    let result = strict.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("not_found"));

    let skippable =
        FindOneBuilder::new("account", RepositorySource::Single(Arc::new(repo))).skippable().build();
    let result = skippable.call(&params, &Context::new());
    assert!(result.is_success());
    assert!(result.context().get(&"account".into()).is_none());
}

#[test]
fn already_present_context_key_short_circuits_the_lookup() {
    let repo = MapRepository::new(vec![account(7)]);
    let pipeline = FindOneBuilder::new("account", RepositorySource::Single(Arc::new(repo))).build();
    let context = Context::new().with("account", Value::Map(account(1)));
    let result = pipeline.call(&[Value::Map(OrderedMap::new())], &context);
    assert!(result.is_success());
    assert_eq!(
        result.context().get(&"account".into()).and_then(Value::as_map).and_then(|m| m.get(&"id".into())),
        Some(&Value::Int(1))
    );
}
