//! FindMany: like [`crate::lookup::find_one::FindOne`] but resolves a set of entities,
//! walking nested arrays to collect one reference per leaf.

use crate::context::Context;
use crate::lookup::shared::{ByColumns, RepositorySource};
use crate::traits::component::{Component, ComponentRef};
use crate::traits::repository::Repository;
use crate::types::error::{codes, Error};
use crate::types::path::{Path, PathAtom};
use crate::types::result::OperationResult;
use crate::types::signature::{Arity, Signature};
use crate::types::value::{Key, OrderedMap, Value};
use std::sync::{Arc, Weak};

/// One leaf reference found while walking a `by` path through nested arrays: its exact
/// location and the id value found there (`None` if the path didn't resolve at all).
struct Reference {
    path: Path,
    value: Option<Value>,
}

/// A [`Reference`] whose value resolved to something other than a missing path or a
/// skipped null — carries its path forward so a `not_found` error can be reported at the
/// exact leaf where the id was requested, rather than at an arbitrary position in the
/// column's id list.
struct PresentRef {
    path: Path,
    value: Value,
}

/// Walks `value` along `atoms`, transparently iterating any [`Value::List`] encountered
/// before the path is fully consumed, and unwrapping a list found at the leaf into one
/// reference per element.
fn walk(value: Option<&Value>, atoms: &[PathAtom], path_so_far: Path, out: &mut Vec<Reference>) {
    match value {
        None => out.push(Reference { path: path_so_far, value: None }),
        Some(Value::List(items)) => {
            for (i, item) in items.iter().enumerate() {
                walk(Some(item), atoms, path_so_far.pushed(i), out);
            }
        }
        Some(v) => match atoms.split_first() {
            Some((first, rest)) => {
                let next = v.dig_atom(first);
                walk(next, rest, path_so_far.pushed(first.clone()), out);
            }
            None => match v {
                Value::List(ids) => {
                    for (i, id) in ids.iter().enumerate() {
                        out.push(Reference { path: path_so_far.pushed(i), value: Some(id.clone()) });
                    }
                }
                other => out.push(Reference { path: path_so_far, value: Some(other.clone()) }),
            },
        },
    }
}

/// Builds a [`FindMany`] with its defaults (`with = {singular(context_key)}_ids`,
/// `type_path = {context_key}_type`, `by = Default`, all flags off).
pub struct FindManyBuilder {
    context_key: Key,
    repository: RepositorySource,
    with: Option<Path>,
    by: ByColumns,
    type_path: Option<Path>,
    nullable: bool,
    omittable: bool,
}

impl FindManyBuilder {
    #[must_use]
    pub fn new(context_key: impl Into<Key>, repository: RepositorySource) -> Self {
        Self {
            context_key: context_key.into(),
            repository,
            with: None,
            by: ByColumns::Default,
            type_path: None,
            nullable: false,
            omittable: false,
        }
    }

    #[must_use]
    pub fn with(mut self, with: Path) -> Self {
        self.with = Some(with);
        self
    }

    #[must_use]
    pub fn by(mut self, by: ByColumns) -> Self {
        self.by = by;
        self
    }

    #[must_use]
    pub fn type_path(mut self, type_path: Path) -> Self {
        self.type_path = Some(type_path);
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn omittable(mut self) -> Self {
        self.omittable = true;
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentRef {
        let with = self.with.unwrap_or_else(|| Path::single(self.context_key.with_suffix("_ids")));
        let type_path = self.type_path.unwrap_or_else(|| Path::single(self.context_key.with_suffix("_type")));
        Arc::new_cyclic(|weak| FindMany {
            context_key: self.context_key,
            repository: self.repository,
            with,
            by: self.by,
            type_path,
            nullable: self.nullable,
            omittable: self.omittable,
            self_ref: weak.clone(),
        })
    }
}

/// See [`FindManyBuilder`] for construction.
pub struct FindMany {
    context_key: Key,
    repository: RepositorySource,
    with: Path,
    by: ByColumns,
    type_path: Path,
    nullable: bool,
    omittable: bool,
    self_ref: Weak<dyn Component>,
}

impl Component for FindMany {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("FindMany invoked after being dropped");
        let noop = || OperationResult::success(self_ref.clone(), params.to_vec(), context.clone());

        if let Some(existing) = context.get(&self.context_key) {
            if self.nullable || !existing.is_null() {
                return noop();
            }
        }

        let root = params.first().cloned().unwrap_or(Value::Null);
        let pointers = self.by.pointers(&self.with);

        let mut all_refs: Vec<(Key, Vec<Reference>)> = Vec::with_capacity(pointers.len());
        for (column, pointer) in &pointers {
            let mut refs = Vec::new();
            walk(Some(&root), pointer.as_slice(), Path::root(), &mut refs);
            all_refs.push((column.clone(), refs));
        }

        let total_refs: usize = all_refs.iter().map(|(_, r)| r.len()).sum();
        let missing_count: usize =
            all_refs.iter().map(|(_, r)| r.iter().filter(|x| x.value.is_none()).count()).sum();
        if self.omittable && total_refs > 0 && missing_count == total_refs {
            return noop();
        }

        let mut errors = Vec::new();
        let mut column_refs: Vec<(Key, Vec<PresentRef>)> = Vec::with_capacity(all_refs.len());
        for (column, refs) in all_refs {
            let mut present = Vec::with_capacity(refs.len());
            for r in refs {
                match r.value {
                    None => errors.push(Error::code(codes::MISSING).with_path(r.path)),
                    Some(Value::Null) if self.nullable => {}
                    Some(Value::Null) => errors.push(Error::code(codes::MISSING).with_path(r.path)),
                    Some(v) => present.push(PresentRef { path: r.path, value: v }),
                }
            }
            column_refs.push((column, present));
        }

        if !errors.is_empty() {
            return OperationResult::failure(self_ref, errors);
        }

        let groups: Vec<(Vec<Value>, Vec<Error>)> = match &self.repository {
            RepositorySource::Single(repo) => column_refs
                .iter()
                .map(|(column, refs)| resolve_column_group(repo.as_ref(), column, refs))
                .collect(),
            RepositorySource::Polymorphic(map) => {
                let tag = root.dig(self.type_path.as_slice());
                match tag {
                    None => {
                        return OperationResult::failure(
                            self_ref,
                            vec![Error::code(codes::MISSING).with_path(self.type_path.clone())],
                        );
                    }
                    Some(tag_value) => {
                        let tag_str = tag_value.as_str().unwrap_or_default();
                        match map.repository_for(tag_str) {
                            Some(repo) => column_refs
                                .iter()
                                .map(|(column, refs)| resolve_column_group(repo, column, refs))
                                .collect(),
                            None => {
                                let allowed = map.allowed_tags();
                                return OperationResult::failure(
                                    self_ref,
                                    vec![Error::code(codes::INCLUDED)
                                        .with_path(self.type_path.clone())
                                        .with_token(
                                            "allowed_values",
                                            Value::List(allowed.into_iter().map(Value::from).collect()),
                                        )],
                                );
                            }
                        }
                    }
                }
            }
        };

        let mut entities = Vec::new();
        let mut not_found_errors = Vec::new();
        for (found, errs) in groups {
            entities.extend(found);
            not_found_errors.extend(errs);
        }
        if !not_found_errors.is_empty() {
            return OperationResult::failure(self_ref, not_found_errors);
        }

        let mut out_context = context.clone();
        out_context.insert(self.context_key.clone(), Value::List(entities));
        OperationResult::success(self_ref, params.to_vec(), out_context)
    }

    fn signature(&self) -> Signature {
        Signature::new(Arity::Fixed(1), true)
    }

    fn debug_name(&self) -> &str {
        "FindMany"
    }
}

/// Issues one `get_many` call for `column`, reporting a `not_found` error at the exact leaf
/// path of every requested id the repository didn't resolve.
///
/// `Repository::get_many` is asked for the deduplicated id set, then each returned entity is
/// matched back to the id that produced it by reading `column` off the entity itself (every
/// entity is expected to carry the same column it was looked up by, as `get_one`'s contract
/// already assumes). This lets a sparse miss anywhere in the id list — not just a trailing
/// one — be reported against the precise `PresentRef::path` that named the missing id.
fn resolve_column_group(repository: &dyn Repository, column: &Key, refs: &[PresentRef]) -> (Vec<Value>, Vec<Error>) {
    if refs.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mut ids = Vec::with_capacity(refs.len());
    for r in refs {
        if !ids.contains(&r.value) {
            ids.push(r.value.clone());
        }
    }
    let attrs = OrderedMap::new().with(column.clone(), Value::List(ids));
    let found = repository.get_many(&attrs);
    let found_ids: Vec<&Value> =
        found.iter().filter_map(|entity| entity.as_map().and_then(|map| map.get(column))).collect();

    let errors = refs
        .iter()
        .filter(|r| !found_ids.contains(&&r.value))
        .map(|r| Error::code(codes::NOT_FOUND).with_path(r.path.clone()))
        .collect();
    (found, errors)
}
