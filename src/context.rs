//! `Context`: the keyed mapping threaded alongside params.
//!
//! Key order is not load-bearing for the combinator algebra — keys are unique and insertion
//! order is irrelevant to equality — but is preserved anyway for deterministic tests.

use crate::types::path::PathAtom;
use crate::types::value::{Key, OrderedMap, Value};
use core::fmt;

/// A keyed mapping from symbolic [`Key`]s to arbitrary [`Value`]s, accumulating as a
/// pipeline runs.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context(OrderedMap);

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self(OrderedMap::new())
    }

    #[must_use]
    pub fn from_map(map: OrderedMap) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn as_map(&self) -> &OrderedMap {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> OrderedMap {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn without(mut self, key: &Key) -> Self {
        self.remove(key);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.0.iter()
    }

    /// Follows a path of keys/indices into the context (Namespace's `context.dig(ns)`).
    #[must_use]
    pub fn dig(&self, path: &[PathAtom]) -> Option<&Value> {
        self.0.dig(path)
    }

    /// Extends `self` with `other`'s entries, `other` winning on key conflicts — the
    /// context half of `OperationResult::merge`.
    pub fn extend(&mut self, other: Context) {
        for (k, v) in other.0.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Returns a new context with `other` merged in, `other` winning on conflicts.
    #[must_use]
    pub fn merged_with(&self, other: &Context) -> Self {
        Self(self.0.clone().merged_with(&other.0))
    }

    /// Recursive merge: where both sides hold a [`Value::Map`] at the same key, merge those
    /// maps recursively instead of letting `other` clobber the whole value.
    ///
    /// This is what makes sequential namespacing with the same `ns` key nest successive
    /// namespaced contexts instead of overwriting them.
    #[must_use]
    pub fn deep_merge(&self, other: &Context) -> Self {
        let mut out = self.0.clone();
        for (k, v) in other.0.iter() {
            let merged = match out.get(k) {
                Some(existing) => deep_merge_values(existing, v),
                None => v.clone(),
            };
            out.insert(k.clone(), merged);
        }
        Self(out)
    }
}

/// Recursively merges two [`Value`]s: `Map` + `Map` merges keys (recursing), anything else
/// lets `b` win, matching [`Context::deep_merge`]'s contract at the value level.
#[must_use]
pub fn deep_merge_values(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Map(ma), Value::Map(mb)) => {
            let mut out = ma.clone();
            for (k, v) in mb.iter() {
                let merged = match out.get(k) {
                    Some(existing) => deep_merge_values(existing, v),
                    None => v.clone(),
                };
                out.insert(k.clone(), merged);
            }
            Value::Map(out)
        }
        _ => b.clone(),
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl FromIterator<(Key, Value)> for Context {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self(OrderedMap::from_iter(iter))
    }
}
