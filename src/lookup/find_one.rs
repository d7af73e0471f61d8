//! FindOne: resolves a single entity from a repository and places it in context under
//! `context_key`.

use crate::context::Context;
use crate::lookup::shared::{ByColumns, RepositorySource};
use crate::traits::component::{Component, ComponentRef};
use crate::types::error::{codes, Error};
use crate::types::path::Path;
use crate::types::result::OperationResult;
use crate::types::signature::{Arity, Signature};
use crate::types::value::{Key, OrderedMap, Value};
use std::sync::{Arc, Weak};

/// Builds a [`FindOne`] with its defaults (`with = {context_key}_id`,
/// `type_path = {context_key}_type`, `by = Default`, all flags off).
pub struct FindOneBuilder {
    context_key: Key,
    repository: RepositorySource,
    with: Option<Path>,
    by: ByColumns,
    type_path: Option<Path>,
    nullable: bool,
    omittable: bool,
    skippable: bool,
}

impl FindOneBuilder {
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
            skippable: false,
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
    pub fn skippable(mut self) -> Self {
        self.skippable = true;
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentRef {
        let with = self.with.unwrap_or_else(|| Path::single(self.context_key.with_suffix("_id")));
        let type_path = self.type_path.unwrap_or_else(|| Path::single(self.context_key.with_suffix("_type")));
        Arc::new_cyclic(|weak| FindOne {
            context_key: self.context_key,
            repository: self.repository,
            with,
            by: self.by,
            type_path,
            nullable: self.nullable,
            omittable: self.omittable,
            skippable: self.skippable,
            self_ref: weak.clone(),
        })
    }
}

/// See [`FindOneBuilder`] for construction.
pub struct FindOne {
    context_key: Key,
    repository: RepositorySource,
    with: Path,
    by: ByColumns,
    type_path: Path,
    nullable: bool,
    omittable: bool,
    skippable: bool,
    self_ref: Weak<dyn Component>,
}

impl Component for FindOne {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let self_ref = self.self_ref.upgrade().expect("FindOne invoked after being dropped");
        let noop = || OperationResult::success(self_ref.clone(), params.to_vec(), context.clone());

        if let Some(existing) = context.get(&self.context_key) {
            if self.nullable || !existing.is_null() {
                return noop();
            }
        }

        let root = params.first().cloned().unwrap_or(Value::Null);
        let pointers = self.by.pointers(&self.with);

        let missing: Vec<&Path> =
            pointers.iter().map(|(_, p)| p).filter(|p| root.dig(p.as_slice()).is_none()).collect();
        if !missing.is_empty() {
            if self.omittable && missing.len() == pointers.len() {
                return noop();
            }
            if !self.omittable {
                let errors = missing
                    .iter()
                    .map(|p| Error::code(codes::MISSING).with_producer(self_ref.clone()).with_path((*p).clone()))
                    .collect();
                return OperationResult::failure(self_ref, errors);
            }
        }

        let values: Vec<Option<Value>> = pointers.iter().map(|(_, p)| root.dig(p.as_slice()).cloned()).collect();
        if self.nullable && values.iter().all(|v| matches!(v, Some(Value::Null) | None)) {
            let mut out_context = context.clone();
            out_context.insert(self.context_key.clone(), Value::Null);
            return OperationResult::success(self_ref, params.to_vec(), out_context);
        }

        let repository: &dyn crate::traits::repository::Repository = match &self.repository {
            RepositorySource::Single(repo) => repo.as_ref(),
            RepositorySource::Polymorphic(map) => {
                match root.dig(self.type_path.as_slice()) {
                    None => {
                        return OperationResult::failure(
                            self_ref,
                            vec![Error::code(codes::MISSING).with_path(self.type_path.clone())],
                        );
                    }
                    Some(tag_value) => {
                        let tag = tag_value.as_str().unwrap_or_default();
                        match map.repository_for(tag) {
                            Some(repo) => repo,
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

        let mut attrs = OrderedMap::new();
        for ((column, _), value) in pointers.iter().zip(values.iter()) {
            attrs.insert(column.clone(), value.clone().unwrap_or(Value::Null));
        }

        match repository.get_one(&attrs) {
            Some(entity) => {
                let mut out_context = context.clone();
                out_context.insert(self.context_key.clone(), entity);
                OperationResult::success(self_ref, params.to_vec(), out_context)
            }
            None if self.skippable => noop(),
            None => {
                let errors = pointers
                    .iter()
                    .map(|(_, p)| Error::code(codes::NOT_FOUND).with_path(p.clone()))
                    .collect();
                OperationResult::failure(self_ref, errors)
            }
        }
    }

    fn signature(&self) -> Signature {
        Signature::new(Arity::Fixed(1), true)
    }

    fn debug_name(&self) -> &str {
        "FindOne"
    }
}
