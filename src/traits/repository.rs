//! The repository interface (egress): `FindOne`/`FindMany`'s collaborator.

use crate::types::value::{OrderedMap, Value};
use std::collections::BTreeMap;

/// A data-store lookup surface.
///
/// `attrs` is the set of column→value pairs assembled from the `by`/`with` configuration;
/// implementations translate that into whatever query mechanism backs them (SQL `WHERE`
/// clauses, an in-memory index, a remote RPC — the core does not care).
pub trait Repository: Send + Sync {
    /// Looks up a single entity matching `attrs`, or `None` if absent.
    fn get_one(&self, attrs: &OrderedMap) -> Option<Value>;

    /// Looks up every entity matching `attrs` (typically one column holding a list of ids).
    fn get_many(&self, attrs: &OrderedMap) -> Vec<Value>;
}

/// A type-tag → [`Repository`] map for FindOne/FindMany's polymorphic variant.
pub trait PolymorphicRepository: Send + Sync {
    fn repository_for(&self, type_tag: &str) -> Option<&dyn Repository>;

    /// The allowed type tags, used to build the `included` error's `tokens.allowed_values`.
    fn allowed_tags(&self) -> Vec<String>;
}

/// A ready-made [`PolymorphicRepository`] backed by a `BTreeMap` of boxed repositories —
/// the common case when wiring a handful of statically-known entity types.
pub struct RepositoryMap {
    repositories: BTreeMap<String, Box<dyn Repository>>,
}

impl RepositoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self { repositories: BTreeMap::new() }
    }

    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, repository: impl Repository + 'static) -> Self {
        self.repositories.insert(tag.into(), Box::new(repository));
        self
    }
}

impl Default for RepositoryMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PolymorphicRepository for RepositoryMap {
    fn repository_for(&self, type_tag: &str) -> Option<&dyn Repository> {
        self.repositories.get(type_tag).map(|b| b.as_ref())
    }

    fn allowed_tags(&self) -> Vec<String> {
        self.repositories.keys().cloned().collect()
    }
}
