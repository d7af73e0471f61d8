//! Chain: first-failure-wins sequential composition.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::OperationResult;
use crate::types::signature::{Arity, Signature};
use crate::types::value::Value;
use std::sync::{Arc, Weak};

/// Runs children in order, feeding each the accumulator's current params/context, stopping
/// at the first failure or shortcut.
pub struct Chain {
    children: Vec<ComponentRef>,
    self_ref: Weak<dyn Component>,
}

impl Chain {
    #[must_use]
    pub fn new(children: Vec<ComponentRef>) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { children, self_ref: weak.clone() })
    }
}

impl Component for Chain {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Chain invoked after being dropped");
        let mut acc = OperationResult::seed(self_ref, params.to_vec(), context.clone());
        for child in &self.children {
            if acc.is_failure() || acc.is_shortcut() {
                break;
            }
            let child_result = child.call(acc.params(), acc.context());
            acc = acc.merge(child_result);
        }
        acc
    }

    fn signature(&self) -> Signature {
        self.children
            .iter()
            .map(|c| c.signature())
            .find(|sig| !matches!(sig.arity, Arity::Fixed(0)))
            .unwrap_or(Signature::new(Arity::Fixed(0), true))
    }

    fn debug_name(&self) -> &str {
        "Chain"
    }
}
