//! Example: bridging an oprail pipeline onto `tower::Service`
//!
//! This example demonstrates wrapping a [`Component`] as a `tower::Service`, so it can
//! sit in a Tower stack alongside ordinary async services.
//!
//! # Requirements
//!
//! Run with: `cargo run --example async_tower_integration --features tower,async-tokio`

use oprail::component::Callable;
use oprail::context::Context;
use oprail::tower_ext::IntoService;
use oprail::traits::Component;
use oprail::types::{Error, OrderedMap, Value};
use tower::Service;

// =============================================================================
// A small pipeline: look up a user id in a fixed roster
// =============================================================================

fn lookup_user(params: &[Value]) -> oprail::types::OperationResult {
    let id = match &params[0] {
        Value::Int(id) => *id,
        _ => return Error::code("invalid").with_message("id must be an integer").into(),
    };
    match id {
        1 => OrderedMap::new().with("id", 1_i64).with("name", "alice").into(),
        2 => OrderedMap::new().with("id", 2_i64).with("name", "bob").into(),
        _ => Error::code("not_found").with_message(format!("user {id} not found")).into(),
    }
}

// =============================================================================
// Using ComponentService
// =============================================================================

#[tokio::main]
async fn main() {
    println!("=== Tower Integration Example ===\n");

    let component = Callable::params_only("lookup_user", 1, lookup_user);

    // 1. Wrapping a component as a tower::Service
    println!("1. Calling through ComponentService:");
    let mut service = component.into_service();

    let result = Service::call(&mut service, (vec![Value::Int(1)], Context::new())).await.unwrap();
    println!("   success? {} -> {:?}", result.is_success(), result.context().get(&"name".into()));

    let result = Service::call(&mut service, (vec![Value::Int(999)], Context::new())).await.unwrap();
    println!("   success? {} -> {:?}", result.is_success(), result.errors());

    // 2. poll_ready is always immediately ready, since a pipeline never suspends
    println!("\n2. poll_ready never needs to wait:");
    std::future::poll_fn(|cx| Service::poll_ready(&mut service, cx)).await.unwrap();
    println!("   ready");

    // 3. Recovering the wrapped component
    println!("\n3. Unwrapping back to the underlying component:");
    let _component = service.into_inner();
    println!("   got the ComponentRef back via .into_inner()");

    println!("\n=== Done ===");
}
