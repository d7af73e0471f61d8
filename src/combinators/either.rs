//! Either: first-success-wins alternation.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::{OperationResult, ResultDelta};
use crate::types::signature::{either_arity, Signature};
use crate::types::value::Value;
use std::sync::{Arc, Weak};

/// Tries children in order with the same input params and context, returning the first
/// successful result (with `operation` rewritten to this `Either`). If every child fails,
/// returns the last failure.
pub struct Either {
    children: Vec<ComponentRef>,
    self_ref: Weak<dyn Component>,
}

impl Either {
    #[must_use]
    pub fn new(children: Vec<ComponentRef>) -> ComponentRef {
        assert!(!children.is_empty(), "Either requires at least one child");
        Arc::new_cyclic(|weak| Self { children, self_ref: weak.clone() })
    }
}

impl Component for Either {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Either invoked after being dropped");
        let mut last = None;
        for child in &self.children {
            let result = child.call(params, context);
            if result.is_success() {
                return result.apply_changes(ResultDelta::new().operation(self_ref));
            }
            last = Some(result);
        }
        last.expect("Either requires at least one child")
            .apply_changes(ResultDelta::new().operation(self_ref))
    }

    fn signature(&self) -> Signature {
        let arity = either_arity(self.children.iter().map(|c| c.signature().arity));
        Signature::new(arity, true)
    }

    fn debug_name(&self) -> &str {
        "Either"
    }
}
