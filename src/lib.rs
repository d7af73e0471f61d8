//! A composable business-operation pipeline engine with railway-oriented control flow.
//!
//! `oprail` wires user-provided callables ("components") into a dataflow tree that
//! short-circuits on failure or early exit, aggregates structured errors with positional
//! paths, stages transactional side effects behind ordered pre/post callbacks, and resolves
//! entities from a repository by path. The engine is organized around three pillars:
//!
//! 1. **A uniform component contract.** Anything exposing [`traits::Component`] —
//!    [`component::Callable`]-wrapped closures and the [`combinators`] themselves — composes
//!    the same way, dispatched by a [`types::Signature`] fixed at wiring time.
//! 2. **An immutable result with a merge algebra.** [`types::OperationResult`] carries
//!    params, context, errors, and an optional shortcut marker; [`types::OperationResult::merge`]
//!    is the single operation every combinator in [`combinators`] builds on.
//! 3. **Transactional side-effect staging.** [`transaction::Transaction`] commits or rolls
//!    back a DB scope around a child pipeline and dispatches `on_success`/`on_failure`
//!    callbacks synchronously or on a process-wide worker pool.
//!
//! Each submodule re-exports its public surface from here, so consumers can depend on
//! `oprail::*` or pick focused pieces as needed.
//!
//! # Example
//!
//! ```
//! use oprail::combinators::Chain;
//! use oprail::component::Callable;
//! use oprail::context::Context;
//! use oprail::traits::Component;
//! use oprail::types::{Error, OrderedMap, Value};
//!
//! let require_title = Callable::params_only("require_title", 1, |params| {
//!     let map = params[0].as_map().cloned().unwrap_or_default();
//!     match map.get(&"title".into()).and_then(Value::as_str) {
//!         Some(title) if !title.is_empty() => map.into(),
//!         _ => Error::code("blank").into(),
//!     }
//! });
//!
//! let pipeline = Chain::new(vec![require_title]);
//! let params = vec![Value::Map(OrderedMap::new().with("title", "Hello"))];
//! let result = pipeline.call(&params, &Context::new());
//! assert!(result.is_success());
//! ```

/// The keyed mapping threaded alongside params, accumulating as a pipeline runs.
pub mod context;
/// The crate's non-pipeline error categories: programming errors and strict-mode failures.
pub mod error;
/// Core data types: [`Value`](types::Value), [`Path`](types::Path), [`Error`](types::Error),
/// [`Signature`](types::Signature), and [`OperationResult`](types::OperationResult) itself.
pub mod types;

/// External collaborator interfaces: the repository, the DB transaction manager, the
/// background job queue, the validation-schema DSL, context type-checking, and the
/// `Component` ingress trait itself.
pub mod traits;

/// Wraps raw user closures into wired-once [`traits::Component`]s with a fixed calling
/// convention.
pub mod component;

/// The combinator set: Chain, Parallel, Fanout, Split, Either, Collection, Namespace,
/// Shortcut, Optional — components that compose other components.
pub mod combinators;

/// Database transaction wrapping and ordered, sync/async side-effect callback dispatch.
pub mod transaction;

/// Path-based extraction from params into repository lookups: `FindOne` and `FindMany`.
pub mod lookup;

/// Thin validator adapters over the external schema-checking collaborators.
pub mod validator;

/// A raising call convention (`call_strict`) for embedders that prefer exception-based
/// ergonomics over inspecting `OperationResult::is_failure` themselves.
pub mod strict;

/// An awaitable wrapper around a transaction's async-mode callback handles.
#[cfg(feature = "async")]
pub mod async_ext;

/// A `tower::Service` bridge for any [`traits::Component`].
#[cfg(feature = "tower")]
pub mod tower_ext;

pub use context::Context;
pub use error::{OperationFailed, ProgrammingError};
pub use strict::CallStrict;
pub use traits::Component;
pub use types::{Error, OperationResult, Signature, Value};
