//! The context-entry type-checking interface (egress): `validator::context_validator`'s
//! collaborator.

use crate::types::value::Value;

/// A single context key's expected type.
///
/// `try_value` is given `None` when the key is absent from the context at all (distinct from
/// a key present holding [`Value::Null`]) — this is what lets a schema decide "absent is
/// fine, default to X" versus "absent is itself an error" without the core special-casing
/// either.
pub trait ContextTypeCheck: Send + Sync {
    /// Validates (and possibly coerces) `value`. `Ok` on success; `Err(message)` on failure.
    fn try_value(&self, value: Option<&Value>) -> Result<Option<Value>, String>;
}

/// A `ContextTypeCheck` that only verifies presence, performing no coercion.
pub struct Required;

impl ContextTypeCheck for Required {
    fn try_value(&self, value: Option<&Value>) -> Result<Option<Value>, String> {
        match value {
            Some(v) => Ok(Some(v.clone())),
            None => Err("is required".to_string()),
        }
    }
}

/// A `ContextTypeCheck` that accepts absence (skipping the write) but type-checks presence
/// via a predicate.
pub struct OptionalTyped<F> {
    predicate: F,
    type_name: &'static str,
}

impl<F> OptionalTyped<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(type_name: &'static str, predicate: F) -> Self {
        Self { predicate, type_name }
    }
}

impl<F> ContextTypeCheck for OptionalTyped<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn try_value(&self, value: Option<&Value>) -> Result<Option<Value>, String> {
        match value {
            None => Ok(None),
            Some(v) if (self.predicate)(v) => Ok(Some(v.clone())),
            Some(_) => Err(format!("must be a {}", self.type_name)),
        }
    }
}
