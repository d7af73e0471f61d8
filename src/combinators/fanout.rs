//! Fanout: every child sees the same input params, each truncated to its own arity.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::{OperationResult, ResultDelta};
use crate::types::signature::{fanout_arity, Signature};
use crate::types::value::Value;
use std::sync::{Arc, Weak};

/// All children receive the same input params (each truncated to its own arity). Errors
/// collect; params from every child are appended in order. No combinator in this family
/// short-circuits on failure, but a shortcut still stops the walk.
pub struct Fanout {
    children: Vec<ComponentRef>,
    self_ref: Weak<dyn Component>,
}

impl Fanout {
    #[must_use]
    pub fn new(children: Vec<ComponentRef>) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { children, self_ref: weak.clone() })
    }
}

impl Component for Fanout {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Fanout invoked after being dropped");
        let mut acc = OperationResult::seed(self_ref, params.to_vec(), context.clone());
        let mut collected_params: Vec<Value> = Vec::new();

        for child in &self.children {
            if acc.is_shortcut() {
                break;
            }
            let arity = child.signature().arity.fixed().unwrap_or(params.len());
            let slice = &params[..arity.min(params.len())];
            let child_result = child.call(slice, acc.context());
            collected_params.extend(child_result.params().to_vec());
            acc = acc.merge(child_result);
        }

        acc.apply_changes(ResultDelta::new().params(collected_params))
    }

    fn signature(&self) -> Signature {
        let arity = fanout_arity(self.children.iter().map(|c| c.signature().arity));
        Signature::new(arity, true)
    }

    fn debug_name(&self) -> &str {
        "Fanout"
    }
}
