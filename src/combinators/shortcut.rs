//! Shortcut: marks a successful child as an early-exit signal for the enclosing
//! Chain/Split.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::OperationResult;
use crate::types::signature::Signature;
use crate::types::value::Value;
use std::sync::{Arc, Weak};

/// Wraps one child. On success, returns the child's result with `shortcut` set to the
/// wrapped child — the enclosing Chain or Split sees this and exits early without treating
/// it as a failure. On failure, swallows the errors and returns an empty success so the
/// enclosing combinator continues to its next step.
pub struct Shortcut {
    child: ComponentRef,
    self_ref: Weak<dyn Component>,
}

impl Shortcut {
    #[must_use]
    pub fn new(child: ComponentRef) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { child, self_ref: weak.clone() })
    }
}

impl Component for Shortcut {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Shortcut invoked after being dropped");
        let result = self.child.call(params, context);
        if result.is_success() {
            result.with_shortcut(self.child.clone())
        } else {
            OperationResult::success(self_ref, Vec::new(), Context::new())
        }
    }

    fn signature(&self) -> Signature {
        self.child.signature()
    }

    fn debug_name(&self) -> &str {
        "Shortcut"
    }
}
