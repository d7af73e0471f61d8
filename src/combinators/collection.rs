//! Collection: iterates a child over a sequence or mapping addressed by a namespace key
//! `K`, prefixing every error with `[K, k, ...]`.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::path::{Path, PathAtom};
use crate::types::result::{OperationResult, ResultDelta};
use crate::types::signature::Signature;
use crate::types::value::{Key, OrderedMap, Value};
use std::sync::{Arc, Weak};

/// One slot in the iterated collection: either a sequence index or a mapping key.
#[derive(Clone, PartialEq, Eq)]
enum CollKey {
    Index(usize),
    Key(Key),
}

impl CollKey {
    fn as_path_atom(&self) -> PathAtom {
        match self {
            CollKey::Index(i) => PathAtom::Index(*i),
            CollKey::Key(k) => PathAtom::Key(k.clone()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Sequence,
    Mapping,
}

fn shape_of(value: &Value) -> Option<Shape> {
    match value {
        Value::List(_) => Some(Shape::Sequence),
        Value::Map(_) => Some(Shape::Mapping),
        _ => None,
    }
}

fn keys_of(value: &Value) -> Vec<CollKey> {
    match value {
        Value::List(l) => (0..l.len()).map(CollKey::Index).collect(),
        Value::Map(m) => m.iter().map(|(k, _)| CollKey::Key(k.clone())).collect(),
        _ => Vec::new(),
    }
}

fn get_by_key<'a>(value: &'a Value, key: &CollKey) -> Option<&'a Value> {
    match (value, key) {
        (Value::List(l), CollKey::Index(i)) => l.get(*i),
        (Value::Map(m), CollKey::Key(k)) => m.get(k),
        _ => None,
    }
}

fn build_collection(shape: Shape, entries: Vec<(CollKey, Value)>) -> Value {
    match shape {
        Shape::Sequence => Value::List(entries.into_iter().map(|(_, v)| v).collect()),
        Shape::Mapping => {
            let mut map = OrderedMap::new();
            for (k, v) in entries {
                if let CollKey::Key(key) = k {
                    map.insert(key, v);
                }
            }
            Value::Map(map)
        }
    }
}

/// Iterates `child` once per key in the union of non-empty keysets found at `key` across
/// every param slot and the context — each invocation seeing only that one slice of the
/// collection, re-assembled afterward into per-slot sequences/mappings.
pub struct Collection {
    key: Key,
    child: ComponentRef,
    self_ref: Weak<dyn Component>,
}

impl Collection {
    #[must_use]
    pub fn new(key: impl Into<Key>, child: ComponentRef) -> ComponentRef {
        Arc::new_cyclic(|weak| Self { key: key.into(), child, self_ref: weak.clone() })
    }
}

impl Component for Collection {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("Collection invoked after being dropped");

        let slot_collections: Vec<Option<&Value>> =
            params.iter().map(|p| p.as_map().and_then(|m| m.get(&self.key))).collect();
        let context_collection = context.get(&self.key);

        let mut shape = None;
        let mut ordered_keys: Vec<CollKey> = Vec::new();
        for candidate in slot_collections.iter().copied().chain(core::iter::once(context_collection)) {
            let Some(v) = candidate else { continue };
            if shape.is_none() {
                shape = shape_of(v);
            }
            for k in keys_of(v) {
                if !ordered_keys.contains(&k) {
                    ordered_keys.push(k);
                }
            }
        }
        let shape = shape.unwrap_or(Shape::Mapping);

        let mut per_slot_entries: Vec<Vec<(CollKey, Value)>> = vec![Vec::new(); params.len()];
        let mut context_entries: Vec<(CollKey, Value)> = Vec::new();
        let mut errors = Vec::new();
        let mut on_success = Vec::new();
        let mut on_failure = Vec::new();

        for k in &ordered_keys {
            let iter_params: Vec<Value> = slot_collections
                .iter()
                .map(|slot| slot.and_then(|v| get_by_key(v, k)).cloned().unwrap_or(Value::Null))
                .collect();
            let iter_context_value =
                context_collection.and_then(|v| get_by_key(v, k)).cloned().unwrap_or(Value::Null);
            let mut iter_context = context.clone();
            iter_context.insert(self.key.clone(), iter_context_value);

            let iter_result = self.child.call(&iter_params, &iter_context);

            for (slot_idx, value) in iter_result.params().iter().enumerate() {
                if let Some(slot) = per_slot_entries.get_mut(slot_idx) {
                    slot.push((k.clone(), value.clone()));
                }
            }
            context_entries.push((k.clone(), Value::Map(iter_result.context().as_map().clone())));

            let prefix = Path::from_atoms([PathAtom::Key(self.key.clone()), k.as_path_atom()]);
            errors.extend(iter_result.errors().iter().map(|e| e.prefixed(&prefix)));
            on_success.extend(iter_result.on_success().iter().cloned());
            on_failure.extend(iter_result.on_failure().iter().cloned());
        }

        let mut out_params: Vec<Value> = Vec::with_capacity(params.len());
        for (slot_idx, slot_value) in params.iter().enumerate() {
            let collection_value = build_collection(shape, core::mem::take(&mut per_slot_entries[slot_idx]));
            let wrapped = match slot_value.as_map() {
                Some(m) => Value::Map(m.clone().with(self.key.clone(), collection_value)),
                None => Value::Map(OrderedMap::new().with(self.key.clone(), collection_value)),
            };
            out_params.push(wrapped);
        }

        let mut out_context = context.clone();
        out_context.insert(self.key.clone(), build_collection(shape, context_entries));

        OperationResult::seed(self_ref, out_params, out_context)
            .apply_changes(ResultDelta::new().errors(errors))
            .with_on_success(on_success)
            .with_on_failure(on_failure)
    }

    fn signature(&self) -> Signature {
        Signature::new(self.child.signature().arity, true)
    }

    fn debug_name(&self) -> &str {
        "Collection"
    }
}
