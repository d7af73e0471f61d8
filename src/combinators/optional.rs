//! Optional: swallows a child's failure instead of propagating it.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::OperationResult;
use crate::types::signature::Signature;
use crate::types::value::Value;
use std::sync::Arc;

/// Wraps one child. Success passes through unchanged. Failure becomes an empty success
/// that preserves the child's params but drops its context and errors — unlike
/// [`crate::combinators::shortcut::Shortcut`], Optional never sets `shortcut`, so the
/// enclosing Chain treats this step as an ordinary (empty) success and keeps going.
pub struct Optional {
    child: ComponentRef,
}

impl Optional {
    #[must_use]
    pub fn new(child: ComponentRef) -> ComponentRef {
        Arc::new(Self { child })
    }
}

impl Component for Optional {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let result = self.child.call(params, context);
        if result.is_success() {
            result
        } else {
            OperationResult::success(self.child.clone(), result.into_params(), Context::new())
        }
    }

    fn signature(&self) -> Signature {
        self.child.signature()
    }

    fn debug_name(&self) -> &str {
        "Optional"
    }
}
