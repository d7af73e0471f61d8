//! Context validator: schema-checks caller-supplied context entries via
//! [`traits::ContextTypeCheck`](crate::traits::ContextTypeCheck).

use crate::context::Context;
use crate::error::OperationFailed;
use crate::traits::component::{Component, ComponentRef};
use crate::traits::type_check::ContextTypeCheck;
use crate::types::error::Error;
use crate::types::path::Path;
use crate::types::result::OperationResult;
use crate::types::signature::Signature;
use crate::types::value::{Key, Value};
use std::sync::{Arc, Weak};

/// One context-key's schema entry.
pub type ContextSchemaEntry = (Key, Arc<dyn ContextTypeCheck>);

/// For each `(key, check)` in the schema, looks up `context[key]` and calls
/// `check.try_value`. An absent key with a successful "absent is fine" response is not
/// written back; any other success overwrites the key. Any failing key becomes an `Error`
/// at `[key]` — or, if constructed via [`ContextValidator::raising`], a typed panic carrying
/// [`OperationFailed`] instead of a returned failure, for embedders that want the
/// exception-based ergonomics at this one validation boundary.
pub struct ContextValidator {
    schema: Vec<ContextSchemaEntry>,
    raise_on_failure: bool,
    self_ref: Weak<dyn Component>,
}

impl ContextValidator {
    #[must_use]
    pub fn new(schema: Vec<ContextSchemaEntry>) -> ComponentRef {
        Self::build(schema, false)
    }

    #[must_use]
    pub fn raising(schema: Vec<ContextSchemaEntry>) -> ComponentRef {
        Self::build(schema, true)
    }

    fn build(schema: Vec<ContextSchemaEntry>, raise_on_failure: bool) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { schema, raise_on_failure, self_ref: weak.clone() })
    }
}

impl Component for ContextValidator {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("ContextValidator invoked after being dropped");

        let mut out_context = context.clone();
        let mut errors = Vec::new();
        for (key, check) in &self.schema {
            match check.try_value(context.get(key)) {
                Ok(Some(value)) => out_context.insert(key.clone(), value),
                Ok(None) => {}
                Err(message) => errors.push(Error::message(message).with_path(Path::single(key.clone()))),
            }
        }

        if !errors.is_empty() {
            let failure = OperationResult::failure(self_ref, errors);
            if self.raise_on_failure {
                std::panic::panic_any(OperationFailed(failure));
            }
            return failure;
        }

        OperationResult::success(self_ref, params.to_vec(), out_context)
    }

    fn signature(&self) -> Signature {
        Signature::context_only()
    }

    fn debug_name(&self) -> &str {
        "ContextValidator"
    }
}
