use crate::support::MapRepository;
use oprail::context::Context;
use oprail::lookup::{ByColumns, FindManyBuilder, RepositorySource};
use oprail::traits::Component;
use oprail::types::{Key, OrderedMap, Path, Value};
use std::sync::Arc;

fn item(id: i64) -> OrderedMap {
    OrderedMap::new().with("id", id)
}

#[test]
fn resolves_a_list_of_ids_into_context() {
    let repo = MapRepository::new(vec![item(1), item(2), item(3)]);
    let pipeline = FindManyBuilder::new("products", RepositorySource::Single(Arc::new(repo))).build();

    let ids = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let params = vec![Value::Map(OrderedMap::new().with("products_ids", ids))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
    let resolved = result.context().get(&"products".into()).and_then(Value::as_list).unwrap();
    assert_eq!(resolved.len(), 3);
}

#[test]
fn a_missing_id_reports_not_found_at_its_own_path() {
    // Only ids 1 and 3 exist; id 999 is the one missing from the store, wherever it sits
    // in the requested list.
    let repo = MapRepository::new(vec![item(1), item(3)]);
    let pipeline = FindManyBuilder::new("products", RepositorySource::Single(Arc::new(repo))).build();

    let ids = Value::List(vec![Value::Int(1), Value::Int(999), Value::Int(3)]);
    let params = vec![Value::Map(OrderedMap::new().with("products_ids", ids))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].code_ref(), Some("not_found"));
    assert_eq!(result.errors()[0].path(), &Path::single("products_ids").pushed(1_usize));
}

#[test]
fn a_missing_id_in_a_nested_array_reports_not_found_at_its_leaf_path() {
    // Mirrors SPEC_FULL.md's scenario S8: `items: [{product_id: 1}, {product_id: [2, 3]}]`
    // with id 2 absent from the store reports `{code: not_found, path: [items, 1,
    // product_id, 0]}` — not against the trailing id 3, which does resolve.
    let repo = MapRepository::new(vec![item(1), item(3)]);
    let pipeline = FindManyBuilder::new("products", RepositorySource::Single(Arc::new(repo)))
        .by(ByColumns::Mapping(vec![(Key::new("id"), Path::from_atoms(["items", "product_id"]))]))
        .build();

    let items = Value::List(vec![
        Value::Map(OrderedMap::new().with("product_id", 1_i64)),
        Value::Map(OrderedMap::new().with("product_id", Value::List(vec![Value::Int(2), Value::Int(3)]))),
    ]);
    let params = vec![Value::Map(OrderedMap::new().with("items", items))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].code_ref(), Some("not_found"));
    assert_eq!(
        result.errors()[0].path(),
        &Path::single("items").pushed(1_usize).pushed("product_id").pushed(0_usize)
    );
}

#[test]
fn nested_array_of_objects_is_walked_to_one_id_per_leaf() {
    let repo = MapRepository::new(vec![item(1), item(2)]);
    let pipeline = FindManyBuilder::new("tags", RepositorySource::Single(Arc::new(repo)))
        .with(oprail::types::Path::from_atoms(["entries", "tag_id"]))
        .build();

    let entries = Value::List(vec![
        Value::Map(OrderedMap::new().with("tag_id", 1_i64)),
        Value::Map(OrderedMap::new().with("tag_id", 2_i64)),
    ]);
    let params = vec![Value::Map(OrderedMap::new().with("entries", entries))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
    let resolved = result.context().get(&"tags".into()).and_then(Value::as_list).unwrap();
    assert_eq!(resolved.len(), 2);
}
