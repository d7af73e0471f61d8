//! Wraps a raw user closure into a [`Component`] with a fixed [`Signature`].
//!
//! A dynamically typed engine can inspect a callable's formal parameters at wiring time to
//! infer `(arity, accepts_context)`. Rust has no such introspection, so `Callable` replaces
//! it with four constructors — one per calling convention — each of which fixes its
//! `Signature` up front instead of deriving it later.

use crate::component::normalize::ReturnValue;
use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::types::result::OperationResult;
use crate::types::signature::{Arity, Signature};
use crate::types::value::Value;
use std::sync::{Arc, Weak};

type ParamsOnlyFn = dyn Fn(&[Value]) -> ReturnValue + Send + Sync;
type ContextOnlyFn = dyn Fn(&Context) -> ReturnValue + Send + Sync;
type ParamsAndContextFn = dyn Fn(&[Value], &Context) -> ReturnValue + Send + Sync;

enum Shape {
    ParamsOnly(usize, Box<ParamsOnlyFn>),
    ContextOnly(Box<ContextOnlyFn>),
    ParamsAndContext(usize, Box<ParamsAndContextFn>),
    AllParams(Box<ParamsAndContextFn>),
}

/// A raw closure adapted into a [`Component`], with its calling convention fixed at
/// construction.
pub struct Callable {
    shape: Shape,
    self_ref: Weak<dyn Component>,
    name: &'static str,
}

impl Callable {
    /// `(Fixed(arity), false)` — invoked with the first `arity` params, no context.
    #[must_use]
    pub fn params_only<F>(name: &'static str, arity: usize, f: F) -> ComponentRef
    where
        F: Fn(&[Value]) -> ReturnValue + Send + Sync + 'static,
    {
        Arc::new_cyclic(|weak| Self {
            shape: Shape::ParamsOnly(arity, Box::new(f)),
            self_ref: weak.clone(),
            name,
        })
    }

    /// `(Fixed(0), true)` — invoked with context only.
    #[must_use]
    pub fn context_only<F>(name: &'static str, f: F) -> ComponentRef
    where
        F: Fn(&Context) -> ReturnValue + Send + Sync + 'static,
    {
        Arc::new_cyclic(|weak| Self {
            shape: Shape::ContextOnly(Box::new(f)),
            self_ref: weak.clone(),
            name,
        })
    }

    /// `(Fixed(arity), true)` — invoked with the first `arity` params plus context.
    #[must_use]
    pub fn params_and_context<F>(name: &'static str, arity: usize, f: F) -> ComponentRef
    where
        F: Fn(&[Value], &Context) -> ReturnValue + Send + Sync + 'static,
    {
        Arc::new_cyclic(|weak| Self {
            shape: Shape::ParamsAndContext(arity, Box::new(f)),
            self_ref: weak.clone(),
            name,
        })
    }

    /// `(Unbounded, true)` — invoked with every remaining positional param plus context.
    #[must_use]
    pub fn all_params<F>(name: &'static str, f: F) -> ComponentRef
    where
        F: Fn(&[Value], &Context) -> ReturnValue + Send + Sync + 'static,
    {
        Arc::new_cyclic(|weak| Self { shape: Shape::AllParams(Box::new(f)), self_ref: weak.clone(), name })
    }

    fn self_ref(&self) -> ComponentRef {
        self.self_ref.upgrade().expect("Callable invoked after being dropped")
    }
}

impl Component for Callable {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let ret = match &self.shape {
            Shape::ParamsOnly(arity, f) => f(&params[..(*arity).min(params.len())]),
            Shape::ContextOnly(f) => f(context),
            Shape::ParamsAndContext(arity, f) => f(&params[..(*arity).min(params.len())], context),
            Shape::AllParams(f) => f(params, context),
        };
        ret.into_result(self.self_ref(), self.name)
    }

    fn signature(&self) -> Signature {
        match &self.shape {
            Shape::ParamsOnly(arity, _) => Signature::new(Arity::Fixed(*arity), false),
            Shape::ContextOnly(_) => Signature::context_only(),
            Shape::ParamsAndContext(arity, _) => Signature::new(Arity::Fixed(*arity), true),
            Shape::AllParams(_) => Signature::new(Arity::Unbounded, true),
        }
    }

    fn debug_name(&self) -> &str {
        self.name
    }
}
