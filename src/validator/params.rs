//! Params validator: a thin adapter over [`traits::ParamsSchema`](crate::traits::ParamsSchema)
//! — the validation-schema DSL itself lives with the caller, not here.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::traits::schema::ParamsSchema;
use crate::types::result::OperationResult;
use crate::types::signature::{Arity, Signature};
use crate::types::value::{OrderedMap, Value};
use std::sync::{Arc, Weak};

/// Validates the first positional param (expected to be a mapping) against a
/// [`ParamsSchema`], merging any context delta the schema produces.
///
/// `optional`: an empty input mapping short-circuits to an empty success without consulting
/// the schema at all — the contract a caller expects for "this whole operation's params are
/// optional" rather than "every individual field is optional".
pub struct ParamsValidator {
    schema: Arc<dyn ParamsSchema>,
    optional: bool,
    self_ref: Weak<dyn Component>,
}

impl ParamsValidator {
    #[must_use]
    pub fn new(schema: Arc<dyn ParamsSchema>) -> ComponentRef {
        Self::build(schema, false)
    }

    #[must_use]
    pub fn optional(schema: Arc<dyn ParamsSchema>) -> ComponentRef {
        Self::build(schema, true)
    }

    fn build(schema: Arc<dyn ParamsSchema>, optional: bool) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { schema, optional, self_ref: weak.clone() })
    }
}

impl Component for ParamsValidator {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("ParamsValidator invoked after being dropped");
        let input = params.first().and_then(Value::as_map).cloned().unwrap_or_default();

        if self.optional && input.is_empty() {
            return OperationResult::success(self_ref, vec![Value::Map(OrderedMap::new())], context.clone());
        }

        let (validated, context_delta, errors) = self.schema.validate(&input, context);
        if !errors.is_empty() {
            return OperationResult::failure(self_ref, errors);
        }

        let out_context = context.deep_merge(&context_delta);
        OperationResult::success(self_ref, vec![Value::Map(validated)], out_context)
    }

    fn signature(&self) -> Signature {
        Signature::new(Arity::Fixed(1), true)
    }

    fn debug_name(&self) -> &str {
        "ParamsValidator"
    }
}
