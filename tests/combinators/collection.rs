use oprail::combinators::Collection;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{Error, OrderedMap, Value};

#[test]
fn iterates_a_list_and_rebuilds_it_in_order() {
    let double = Callable::params_only("double", 1, |params| {
        let n = match params[0].as_map().and_then(|m| m.get(&"n".into())) {
            Some(Value::Int(n)) => *n,
            _ => 0,
        };
        OrderedMap::new().with("n", n * 2).into()
    });
    let pipeline = Collection::new("items", double);

    let items = Value::List(vec![
        Value::Map(OrderedMap::new().with("n", 1_i64)),
        Value::Map(OrderedMap::new().with("n", 2_i64)),
    ]);
    let params = vec![Value::Map(OrderedMap::new().with("items", items))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());

    let rebuilt = result.params()[0].as_map().and_then(|m| m.get(&"items".into())).and_then(Value::as_list).unwrap();
    assert_eq!(rebuilt[0].as_map().and_then(|m| m.get(&"n".into())), Some(&Value::Int(2)));
    assert_eq!(rebuilt[1].as_map().and_then(|m| m.get(&"n".into())), Some(&Value::Int(4)));
}

#[test]
fn element_errors_are_prefixed_with_key_and_index() {
    let fail_on_negative = Callable::params_only("fail_on_negative", 1, |params| {
        let n = match params[0].as_map().and_then(|m| m.get(&"n".into())) {
            Some(Value::Int(n)) => *n,
            _ => 0,
        };
        if n < 0 {
            Error::code("invalid").into()
        } else {
            OrderedMap::new().into()
        }
    });
    let pipeline = Collection::new("items", fail_on_negative);
    let items = Value::List(vec![
        Value::Map(OrderedMap::new().with("n", 1_i64)),
        Value::Map(OrderedMap::new().with("n", -1_i64)),
    ]);
    let params = vec![Value::Map(OrderedMap::new().with("items", items))];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_failure());
    assert_eq!(result.errors()[0].path().len(), 2);
}
