//! The opaque value type flowing through params and context.
//!
//! A param slot is typically a keyed mapping in practice, but the combinator
//! algebra must accept arbitrary values — a [`combinators::Chain`](crate::combinators::Chain)
//! step may hand back a bare integer, and [`lookup`](crate::lookup) resolves entities that
//! have no sensible serialized form at all. [`Value`] is the sum type that makes that legal.

use core::any::Any;
use core::fmt;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// A symbolic key used to address entries in an [`OrderedMap`] or a [`crate::context::Context`].
///
/// Cloning a `Key` is cheap: it is a `Cow<'static, str>` under the hood, so keys built from
/// `&'static str` literals (the overwhelming majority at wiring time) never allocate.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(Cow<'static, str>);

impl Key {
    /// Creates a key from a static string literal, at no allocation cost.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from an owned, dynamically built string.
    #[inline]
    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the key's textual form.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a derived key by appending a suffix, e.g. `context_key` + `_id`.
    ///
    /// Used by [`lookup::FindOne`](crate::lookup::FindOne) / [`lookup::FindMany`](crate::lookup::FindMany)
    /// to compute default lookup columns from `context_key`.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        let mut owned = self.0.clone().into_owned();
        owned.push_str(suffix);
        Self(Cow::Owned(owned))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&'static str> for Key {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::owned(name)
    }
}

impl AsRef<str> for Key {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Insertion-order-preserving map from [`Key`] to [`Value`].
///
/// Backed by a [`SmallVec`] with inline storage for four entries — most params/context maps
/// in a business operation carry a handful of fields, so this avoids a heap allocation in
/// the common case while still growing for larger payloads.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedMap(SmallVec<[(Key, Value); 4]>);

impl OrderedMap {
    /// Creates an empty map.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts or overwrites an entry, preserving original insertion position on overwrite.
    pub fn insert(&mut self, key: Key, value: Value) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Removes an entry, returning its value if present.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let idx = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(idx).1)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// Merges `other` into `self`, `other` winning on key conflicts.
    ///
    /// This is the map-level building block behind [`OperationResult::merge`](crate::types::OperationResult::merge)'s
    /// context union and [`crate::context::Context::deep_merge`].
    #[must_use]
    pub fn merged_with(mut self, other: &OrderedMap) -> Self {
        for (k, v) in other.iter() {
            self.insert(k.clone(), v.clone());
        }
        self
    }

    /// Looks up a nested value by following a path of keys/indices through `Map`/`List` values.
    ///
    /// Mirrors the "pointer" / "dig" addressing used by Namespace's `from` path and
    /// FindOne/FindMany's `by` columns.
    #[must_use]
    pub fn dig(&self, path: &[crate::types::path::PathAtom]) -> Option<&Value> {
        let mut current = None;
        let mut iter = path.iter();
        match iter.next() {
            Some(crate::types::path::PathAtom::Key(k)) => current = self.get(k),
            Some(crate::types::path::PathAtom::Index(_)) | None => return None,
        }
        for atom in iter {
            current = current?.dig_atom(atom);
        }
        current
    }
}

impl FromIterator<(Key, Value)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// The opaque value carried by a param slot or a context entry.
///
/// Deliberately not constrained to a mapping — components are free to return or consume
/// primitives, lists, or opaque repository entities.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'static, str>),
    List(Vec<Value>),
    Map(OrderedMap),
    /// An opaque, non-serializable value — typically an entity resolved by
    /// [`lookup::FindOne`](crate::lookup::FindOne) / [`lookup::FindMany`](crate::lookup::FindMany) from a
    /// [`traits::Repository`](crate::traits::Repository).
    #[cfg_attr(feature = "serde", serde(skip))]
    Entity(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Views the value as a map, if it is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Views the value as a list, if it is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Views the value as a string, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Downcasts an entity value to a concrete repository type.
    #[must_use]
    pub fn downcast_entity<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Entity(e) => e.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Wraps an arbitrary `Send + Sync` entity as an opaque [`Value::Entity`].
    pub fn entity<T: Any + Send + Sync>(value: T) -> Self {
        Value::Entity(Arc::new(value))
    }

    /// Follows one path atom into this value (a [`Value::Map`] lookup by key, or a
    /// [`Value::List`] index).
    #[must_use]
    pub fn dig_atom(&self, atom: &crate::types::path::PathAtom) -> Option<&Value> {
        use crate::types::path::PathAtom;
        match (self, atom) {
            (Value::Map(m), PathAtom::Key(k)) => m.get(k),
            (Value::List(l), PathAtom::Index(i)) => l.get(*i),
            _ => None,
        }
    }

    /// Follows a full path of atoms through nested maps/lists.
    #[must_use]
    pub fn dig(&self, path: &[crate::types::path::PathAtom]) -> Option<&Value> {
        let mut current = self;
        for atom in path {
            current = current.dig_atom(atom)?;
        }
        Some(current)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::List(l) => f.debug_list().entries(l.iter()).finish(),
            Value::Map(m) => f.debug_map().entries(m.iter()).finish(),
            Value::Entity(_) => write!(f, "Entity(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Entities compare by pointer identity only; they carry no `PartialEq` bound.
            (Value::Entity(a), Value::Entity(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Value::Str(Cow::Borrowed(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(Cow::Owned(v))
    }
}

impl From<OrderedMap> for Value {
    fn from(v: OrderedMap) -> Self {
        Value::Map(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}
