use oprail::combinators::Fanout;
use oprail::component::Callable;
use oprail::context::Context;
use oprail::traits::Component;
use oprail::types::Value;

#[test]
fn every_child_receives_the_full_params_truncated_to_its_own_arity() {
    let wants_one = Callable::params_only("wants_one", 1, |params| Value::List(params.to_vec()).into());
    let wants_two = Callable::params_only("wants_two", 2, |params| Value::List(params.to_vec()).into());
    let pipeline = Fanout::new(vec![wants_one, wants_two]);
    let params = vec![Value::Int(1), Value::Int(2)];
    let result = pipeline.call(&params, &Context::new());
    assert!(result.is_success());
    // wants_one's echoed list (length 1) followed by wants_two's (length 2).
    assert_eq!(result.params().len(), 3);
}
