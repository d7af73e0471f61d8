//! Parallel: distributes disjoint param slices to children by arity, collecting every
//! error instead of stopping at the first.

use crate::combinators::distribute::{pack_by_index, take_slice};
use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::{OperationResult, ResultDelta};
use crate::types::signature::{Arity, Signature};
use crate::types::value::Value;
use std::sync::{Arc, Weak};

/// Walks children left to right, handing each a disjoint slice of `params` sized to its
/// arity (or, when `params` has exactly one element, the same single element to every
/// child — the "fan-out" special case). Stops early only on a shortcut; failures are
/// collected and every remaining child still runs.
pub struct Parallel {
    children: Vec<ComponentRef>,
    pack_by_index: bool,
    self_ref: Weak<dyn Component>,
}

impl Parallel {
    #[must_use]
    pub fn new(children: Vec<ComponentRef>) -> ComponentRef {
        Self::build(children, false)
    }

    /// Packs per-child params index-wise instead of concatenating them (`pack_by_index`).
    #[must_use]
    pub fn packed(children: Vec<ComponentRef>) -> ComponentRef {
        Self::build(children, true)
    }

    fn build(children: Vec<ComponentRef>, pack_by_index: bool) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { children, pack_by_index, self_ref: weak.clone() })
    }
}

impl Component for Parallel {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Parallel invoked after being dropped");
        let mut acc = OperationResult::seed(self_ref, params.to_vec(), context.clone());
        let fan_out = params.len() == 1;
        let mut remaining: Vec<Value> = params.to_vec();
        let mut per_child_params: Vec<Vec<Value>> = Vec::with_capacity(self.children.len());

        for child in &self.children {
            if acc.is_shortcut() {
                break;
            }
            let slice = if fan_out {
                params.to_vec()
            } else {
                take_slice(child.signature().arity, &mut remaining)
            };
            let child_result = child.call(&slice, acc.context());
            per_child_params.push(child_result.params().to_vec());
            acc = acc.merge(child_result);
        }

        let mut final_params = if self.pack_by_index {
            pack_by_index(per_child_params)
        } else {
            per_child_params.into_iter().flatten().collect()
        };
        if params.len() > 1 {
            final_params.extend(remaining);
        }
        acc.apply_changes(ResultDelta::new().params(final_params))
    }

    fn signature(&self) -> Signature {
        let arity = self
            .children
            .iter()
            .map(|c| c.signature().arity)
            .fold(Arity::Fixed(0), Arity::add);
        Signature::new(arity, true)
    }

    fn debug_name(&self) -> &str {
        "Parallel"
    }
}
