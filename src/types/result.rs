//! `OperationResult`: the immutable carrier every component invocation produces.

use crate::context::Context;
use crate::traits::component::ComponentRef;
use crate::transaction::pool::CallbackHandle;
use crate::types::error::Error;
use crate::types::value::Value;
use std::sync::Arc;

/// Either a resolved callback result or a pending async handle.
///
/// Transaction's `on_success` list is built from these: sync mode resolves every callback
/// before returning, async mode stores the handle and lets the caller `.join()` it (or
/// `.await` it through [`crate::async_ext::AsyncPending`] under the `async` feature).
#[derive(Clone)]
pub enum CallbackOutcome {
    Resolved(Box<OperationResult>),
    Pending(Arc<CallbackHandle>),
}

impl CallbackOutcome {
    /// Blocks the calling thread until the outcome resolves to a result.
    ///
    /// A no-op for an already-resolved outcome; for a pending one, blocks on the worker
    /// thread that is running the callback.
    #[must_use]
    pub fn join(&self) -> OperationResult {
        match self {
            CallbackOutcome::Resolved(r) => (**r).clone(),
            CallbackOutcome::Pending(handle) => handle.join(),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, CallbackOutcome::Pending(_))
    }

    /// Converts a pending outcome into an awaitable [`crate::async_ext::AsyncPending`].
    ///
    /// An already-resolved outcome is wrapped in a future that completes immediately on first
    /// poll, so callers can treat every outcome uniformly regardless of sync/async dispatch.
    #[cfg(feature = "async")]
    #[must_use]
    pub fn into_future(self) -> crate::async_ext::AsyncPending {
        match self {
            CallbackOutcome::Resolved(r) => {
                let handle = crate::transaction::pool::CallbackHandle::pending();
                handle.resolve(*r);
                crate::async_ext::AsyncPending::new(handle)
            }
            CallbackOutcome::Pending(handle) => crate::async_ext::AsyncPending::new(handle),
        }
    }
}

/// The field-level overrides accepted by [`OperationResult::apply_changes`].
///
/// Every field defaults to "keep the original value" (`None`); setting a field to `Some`
/// overrides it. A builder-style struct rather than a closure, so call sites read as a diff.
#[derive(Default)]
pub struct ResultDelta {
    pub operation: Option<ComponentRef>,
    pub params: Option<Vec<Value>>,
    pub context: Option<Context>,
    pub errors: Option<Vec<Error>>,
    pub shortcut: Option<Option<ComponentRef>>,
}

impl ResultDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn operation(mut self, op: ComponentRef) -> Self {
        self.operation = Some(op);
        self
    }

    #[must_use]
    pub fn params(mut self, params: Vec<Value>) -> Self {
        self.params = Some(params);
        self
    }

    #[must_use]
    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn errors(mut self, errors: Vec<Error>) -> Self {
        self.errors = Some(errors);
        self
    }

    #[must_use]
    pub fn shortcut(mut self, shortcut: Option<ComponentRef>) -> Self {
        self.shortcut = Some(shortcut);
        self
    }
}

/// The immutable record of one component invocation.
///
/// Never mutated after construction: every transformation (`apply_changes`, `merge`, the
/// combinators' per-node bookkeeping) consumes `self` and returns a new value.
#[derive(Clone)]
pub struct OperationResult {
    operation: ComponentRef,
    params: Vec<Value>,
    context: Context,
    errors: Vec<Error>,
    shortcut: Option<ComponentRef>,
    on_success: Vec<CallbackOutcome>,
    on_failure: Vec<CallbackOutcome>,
}

impl OperationResult {
    /// Seeds a fresh accumulator for a combinator's own invocation, carrying no errors or
    /// callbacks yet — the starting point of Chain's `acc` and similar loops.
    #[must_use]
    pub fn seed(operation: ComponentRef, params: Vec<Value>, context: Context) -> Self {
        Self {
            operation,
            params,
            context,
            errors: Vec::new(),
            shortcut: None,
            on_success: Vec::new(),
            on_failure: Vec::new(),
        }
    }

    #[must_use]
    pub fn success(operation: ComponentRef, params: Vec<Value>, context: Context) -> Self {
        Self::seed(operation, params, context)
    }

    #[must_use]
    pub fn failure(operation: ComponentRef, errors: Vec<Error>) -> Self {
        Self {
            operation,
            params: Vec::new(),
            context: Context::new(),
            errors,
            shortcut: None,
            on_success: Vec::new(),
            on_failure: Vec::new(),
        }
    }

    #[must_use]
    pub fn operation(&self) -> &ComponentRef {
        &self.operation
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    #[must_use]
    pub fn into_params(self) -> Vec<Value> {
        self.params
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn into_context(self) -> Context {
        self.context
    }

    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    #[must_use]
    pub fn shortcut(&self) -> Option<&ComponentRef> {
        self.shortcut.as_ref()
    }

    #[must_use]
    pub fn on_success(&self) -> &[CallbackOutcome] {
        &self.on_success
    }

    #[must_use]
    pub fn on_failure(&self) -> &[CallbackOutcome] {
        &self.on_failure
    }

    /// `errors.is_empty()`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// `!is_success()`.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        self.shortcut.is_some()
    }

    #[must_use]
    pub fn with_shortcut(mut self, shortcut: ComponentRef) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    #[must_use]
    pub fn with_on_success(mut self, outcomes: Vec<CallbackOutcome>) -> Self {
        self.on_success = outcomes;
        self
    }

    #[must_use]
    pub fn with_on_failure(mut self, outcomes: Vec<CallbackOutcome>) -> Self {
        self.on_failure = outcomes;
        self
    }

    #[must_use]
    pub fn with_operation(mut self, operation: ComponentRef) -> Self {
        self.operation = operation;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    /// Returns every error with `prefix` prepended to its path — Namespace and Collection's
    /// error-path transform.
    #[must_use]
    pub fn with_errors_prefixed(mut self, prefix: &crate::types::path::Path) -> Self {
        self.errors = self.errors.iter().map(|e| e.prefixed(prefix)).collect();
        self
    }

    /// Unwraps a finished result: success wraps the accumulated context, failure wraps the
    /// accumulated errors.
    #[must_use]
    pub fn to_outcome(self) -> Result<Context, Vec<Error>> {
        if self.is_success() {
            Ok(self.context)
        } else {
            Err(self.errors)
        }
    }

    /// Applies a [`ResultDelta`], overriding only the fields that are `Some`.
    #[must_use]
    pub fn apply_changes(self, delta: ResultDelta) -> Self {
        Self {
            operation: delta.operation.unwrap_or(self.operation),
            params: delta.params.unwrap_or(self.params),
            context: delta.context.unwrap_or(self.context),
            errors: delta.errors.unwrap_or(self.errors),
            shortcut: delta.shortcut.unwrap_or(self.shortcut),
            on_success: self.on_success,
            on_failure: self.on_failure,
        }
    }

    /// Combines `self` and `other` in evaluation order:
    /// - `operation`: keeps `self.operation`.
    /// - `shortcut`: first non-nil wins.
    /// - `params`: adopts `other.params` unless it is empty.
    /// - `context`: union, `other` winning on key conflicts.
    /// - `errors`, `on_success`, `on_failure`: concatenated in order.
    #[must_use]
    pub fn merge(self, other: OperationResult) -> Self {
        let shortcut = self.shortcut.or(other.shortcut);
        let params = if other.params.is_empty() { self.params } else { other.params };
        let mut context = self.context;
        context.extend(other.context);
        let mut errors = self.errors;
        errors.extend(other.errors);
        let mut on_success = self.on_success;
        on_success.extend(other.on_success);
        let mut on_failure = self.on_failure;
        on_failure.extend(other.on_failure);
        Self { operation: self.operation, params, context, errors, shortcut, on_success, on_failure }
    }
}

/// Wraps a result as an opaque entity value — used by
/// [`crate::transaction::transaction::Transaction`] to pass the whole child result to a
/// legacy-style `on_failure` callback that takes a single positional argument.
impl From<OperationResult> for Value {
    fn from(result: OperationResult) -> Self {
        Value::entity(result)
    }
}
