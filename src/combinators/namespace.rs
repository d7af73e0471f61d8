//! Namespace: scopes a sub-pipeline under a key path, prefixing errors and deep-merging
//! context on repeated use of the same namespace.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::error::{codes, Error};
use crate::types::path::{Path, PathAtom};
use crate::types::result::{OperationResult, ResultDelta};
use crate::types::signature::{Arity, Signature};
use crate::types::value::{Key, OrderedMap, Value};
use std::sync::{Arc, Weak};

/// Builds a [`Namespace`] with its defaults (`from = ns`, `optional = false`) and optional
/// overrides.
pub struct NamespaceBuilder {
    ns: Vec<Key>,
    from: Option<Path>,
    optional: bool,
    child: ComponentRef,
}

impl NamespaceBuilder {
    #[must_use]
    pub fn new(ns: Vec<Key>, child: ComponentRef) -> Self {
        assert!(!ns.is_empty(), "Namespace requires at least one key atom");
        Self { ns, from: None, optional: false, child }
    }

    /// Overrides the extraction path. `Path::root()` ("`[]`") means "pass through full
    /// params".
    #[must_use]
    pub fn from(mut self, from: Path) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentRef {
        let from = self.from.unwrap_or_else(|| Path::from_atoms(self.ns.iter().cloned().map(PathAtom::Key)));
        let pass_through = from.is_empty();
        Arc::new_cyclic(|weak| Namespace {
            ns: self.ns,
            from,
            pass_through,
            optional: self.optional,
            child: self.child,
            self_ref: weak.clone(),
        })
    }
}

/// See [`NamespaceBuilder`] for construction.
pub struct Namespace {
    ns: Vec<Key>,
    from: Path,
    pass_through: bool,
    optional: bool,
    child: ComponentRef,
    self_ref: Weak<dyn Component>,
}

impl Namespace {
    fn ns_path(&self) -> Path {
        Path::from_atoms(self.ns.iter().cloned().map(PathAtom::Key))
    }

    /// Wraps `value` in nested single-key maps, innermost-first, following `atoms`.
    fn wrap_nested(atoms: &[Key], value: Value) -> Value {
        atoms.iter().rev().fold(value, |acc, key| Value::Map(OrderedMap::new().with(key.clone(), acc)))
    }
}

impl Component for Namespace {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Namespace invoked after being dropped");

        let present = self.pass_through || params.iter().any(|p| p.dig(self.from.as_slice()).is_some());
        if !present {
            if self.optional {
                return OperationResult::success(self_ref, params.to_vec(), context.clone());
            }
            return OperationResult::failure(
                self_ref,
                vec![Error::code(codes::MISSING).with_path(self.from.clone())],
            );
        }

        let ns_path = self.ns_path();
        let ns_head = &self.ns[0];
        let mut base_context = context.clone();
        base_context.remove(ns_head);
        if let Some(Value::Map(dug)) = context.dig(ns_path.as_slice()) {
            for (k, v) in dug.iter() {
                if base_context.get(k).is_none() {
                    base_context.insert(k.clone(), v.clone());
                }
            }
        }

        let arity_n = self.child.signature().arity.fixed().unwrap_or(params.len()).min(params.len());
        let mut inner_params = Vec::with_capacity(params.len());
        for (i, p) in params.iter().enumerate() {
            if i < arity_n {
                let extracted =
                    p.dig(self.from.as_slice()).cloned().unwrap_or_else(|| Value::Map(OrderedMap::new()));
                inner_params.push(extracted);
            } else {
                inner_params.push(p.clone());
            }
        }

        let child_result = self.child.call(&inner_params, &base_context);

        let mut out_params = Vec::with_capacity(params.len());
        for (i, p) in params.iter().enumerate() {
            if i < arity_n {
                let returned = child_result.params().get(i).cloned().unwrap_or(Value::Null);
                out_params.push(Self::wrap_nested(&self.ns, returned));
            } else {
                out_params.push(p.clone());
            }
        }

        let existing_ns_leaf = match context.dig(ns_path.as_slice()) {
            Some(Value::Map(m)) => m.clone(),
            _ => OrderedMap::new(),
        };
        let merged_leaf = existing_ns_leaf.merged_with(child_result.context().as_map());
        let ns_delta_value = Self::wrap_nested(&self.ns[1..], Value::Map(merged_leaf));
        let mut delta_context = Context::new();
        delta_context.insert(ns_head.clone(), ns_delta_value);
        let out_context = context.deep_merge(&delta_context);

        let errors = child_result.errors().iter().map(|e| e.prefixed(&ns_path)).collect();

        OperationResult::seed(self_ref, out_params, out_context)
            .apply_changes(ResultDelta::new().errors(errors))
            .with_on_success(child_result.on_success().to_vec())
            .with_on_failure(child_result.on_failure().to_vec())
    }

    fn signature(&self) -> Signature {
        if self.pass_through {
            self.child.signature()
        } else {
            Signature::new(Arity::Fixed(1), true)
        }
    }

    fn debug_name(&self) -> &str {
        "Namespace"
    }
}
