use oprail::component::Callable;
use oprail::traits::Component;
use oprail::types::signature::{Arity, Signature};

#[test]
fn params_only_fixes_arity_and_no_context() {
    let c = Callable::params_only("f", 2, |_| oprail::types::OrderedMap::new().into());
    assert_eq!(c.signature(), Signature::new(Arity::Fixed(2), false));
}

#[test]
fn all_params_is_unbounded_and_accepts_context() {
    let c = Callable::all_params("f", |_, _| oprail::types::OrderedMap::new().into());
    assert_eq!(c.signature(), Signature::new(Arity::Unbounded, true));
}

#[test]
fn context_only_is_fixed_zero_true() {
    let c = Callable::context_only("f", |_| oprail::types::OrderedMap::new().into());
    assert_eq!(c.signature(), Signature::context_only());
}

#[test]
fn arity_add_is_absorbing_for_unbounded() {
    assert_eq!(Arity::Fixed(2).add(Arity::Unbounded), Arity::Unbounded);
    assert_eq!(Arity::Fixed(2).add(Arity::Fixed(3)), Arity::Fixed(5));
}

#[test]
fn either_arity_dominates_on_any_unbounded_child() {
    let arities = vec![Arity::Fixed(1), Arity::Unbounded, Arity::Fixed(4)];
    assert_eq!(oprail::types::signature::either_arity(arities), Arity::Unbounded);
}

#[test]
fn fanout_arity_ignores_unbounded_when_a_fixed_sibling_exists() {
    let arities = vec![Arity::Fixed(1), Arity::Unbounded, Arity::Fixed(4)];
    assert_eq!(oprail::types::signature::fanout_arity(arities), Arity::Fixed(4));
}
