//! Quick Start Example
//!
//! This example demonstrates the core building blocks of oprail: wrapping plain
//! functions as components with `Callable`, composing them with `Chain`, and reading
//! the result back out with `to_outcome`.
//!
//! Run with: `cargo run --example quick_start`

use oprail::combinators::Chain;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::{Error, OrderedMap, Value};

// =============================================================================
// Step 1: Wrapping a plain function as a component
// =============================================================================

fn step1_a_single_component() {
    println!("=== Step 1: A single component ===\n");

    let greet = Callable::params_only("greet", 1, |params| {
        let name = params[0].as_str().unwrap_or("stranger");
        OrderedMap::new().with("message", format!("hello, {name}")).into()
    });

    let params = vec![Value::Str("ada".into())];
    let result = greet.call(&params, &Context::new());
    println!("success? {}", result.is_success());
    println!("message: {:?}\n", result.context().get(&"message".into()));
}

// =============================================================================
// Step 2: Chaining components, each step seeing the last one's context
// =============================================================================

fn validate_order(params: &[Value]) -> oprail::types::OperationResult {
    let order = params[0].as_map().cloned().unwrap_or_default();
    match order.get(&"quantity".into()) {
        Some(Value::Int(q)) if *q > 0 => order.into(),
        _ => Error::code("invalid").with_message("quantity must be positive").into(),
    }
}

fn price_order(params: &[Value]) -> oprail::types::OperationResult {
    let order = params[0].as_map().cloned().unwrap_or_default();
    let quantity = match order.get(&"quantity".into()) {
        Some(Value::Int(q)) => *q,
        _ => 0,
    };
    order.with("total_cents", quantity * 499).into()
}

fn step2_a_chain_of_components() {
    println!("=== Step 2: Chaining components ===\n");

    let pipeline = Chain::new(vec![
        Callable::params_only("validate_order", 1, validate_order),
        Callable::params_only("price_order", 1, price_order),
    ]);

    let order = Value::Map(OrderedMap::new().with("quantity", 3_i64));
    let result = pipeline.call(&[order], &Context::new());

    match result.to_outcome() {
        Ok(context) => println!("order total: {:?}\n", context.get(&"total_cents".into())),
        Err(errors) => println!("rejected: {errors:?}\n"),
    }

    let bad_order = Value::Map(OrderedMap::new().with("quantity", 0_i64));
    let result = pipeline.call(&[bad_order], &Context::new());
    match result.to_outcome() {
        Ok(context) => println!("order total: {:?}", context.get(&"total_cents".into())),
        Err(errors) => println!("rejected: {} error(s) logged above the fold", errors.len()),
    }
}

fn main() {
    step1_a_single_component();
    step2_a_chain_of_components();
}
