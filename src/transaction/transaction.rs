//! Transaction: wraps a child in a database transaction scope, committing on success or a
//! shortcut and rolling back on failure, then dispatching `on_success`/`on_failure`
//! callbacks.

use crate::context::Context;
use crate::traits::component::{Component, ComponentRef};
use crate::traits::db::DbTransactionManager;
use crate::transaction::mode::{sync_callbacks, with_sync_callbacks};
use crate::transaction::pool::{CallbackHandle, WorkerPool};
use crate::types::result::{CallbackOutcome, OperationResult};
use crate::types::signature::{Arity, Signature};
use crate::types::value::Value;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

/// Builds a [`Transaction`] with its child and callback lists.
pub struct TransactionBuilder {
    db: Arc<dyn DbTransactionManager>,
    child: ComponentRef,
    on_success: Vec<ComponentRef>,
    on_failure: Vec<ComponentRef>,
}

impl TransactionBuilder {
    #[must_use]
    pub fn new(db: Arc<dyn DbTransactionManager>, child: ComponentRef) -> Self {
        Self { db, child, on_success: Vec::new(), on_failure: Vec::new() }
    }

    #[must_use]
    pub fn on_success(mut self, callbacks: Vec<ComponentRef>) -> Self {
        self.on_success = callbacks;
        self
    }

    #[must_use]
    pub fn on_failure(mut self, callbacks: Vec<ComponentRef>) -> Self {
        self.on_failure = callbacks;
        self
    }

    #[must_use]
    pub fn build(self) -> ComponentRef {
        Arc::new_cyclic(|weak| Transaction {
            db: self.db,
            child: self.child,
            on_success: self.on_success,
            on_failure: self.on_failure,
            self_ref: weak.clone(),
        })
    }
}

/// See [`TransactionBuilder`] for construction.
pub struct Transaction {
    db: Arc<dyn DbTransactionManager>,
    child: ComponentRef,
    on_success: Vec<ComponentRef>,
    on_failure: Vec<ComponentRef>,
    #[allow(dead_code)]
    self_ref: Weak<dyn Component>,
}

/// A callback whose signature is exactly "one positional param, no context" is treated as the
/// legacy convention: it receives the whole child result wrapped as a single [`Value`], not
/// the result's own params.
fn is_legacy_failure_callback(callback: &ComponentRef) -> bool {
    let sig = callback.signature();
    matches!(sig.arity, Arity::Fixed(1)) && !sig.accepts_context
}

fn invoke_failure_callback(callback: &ComponentRef, child_result: &OperationResult) -> OperationResult {
    if is_legacy_failure_callback(callback) {
        let wrapped = vec![Value::from(child_result.clone())];
        callback.call(&wrapped, &Context::new())
    } else {
        let mut params = child_result.params().to_vec();
        params.push(Value::from(child_result.clone()));
        callback.call(&params, child_result.context())
    }
}

/// Runs `callback` with `child_result`'s params/context, catching a panic so it cannot tear
/// down the worker thread running an async `on_success` dispatch; a caught panic is
/// re-raised on a freshly spawned, detached thread instead.
fn invoke_success_callback(callback: &ComponentRef, params: &[Value], context: &Context) -> OperationResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback.call(params, context)));
    match outcome {
        Ok(result) => result,
        Err(payload) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("on_success callback panicked, re-raising on a detached thread");
            std::thread::spawn(move || panic::resume_unwind(payload));
            OperationResult::failure(
                callback.clone(),
                vec![crate::types::error::Error::code(crate::types::error::codes::INVALID)
                    .with_message("on_success callback panicked")],
            )
        }
    }
}

impl Component for Transaction {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        let mut scope = self.db.begin();
        let child_result = self.child.call(params, context);

        if child_result.is_shortcut() {
            #[cfg(feature = "tracing")]
            tracing::debug!("transaction: child shortcut, committing with no callbacks");
            scope.commit();
            return child_result;
        }

        if child_result.is_failure() {
            #[cfg(feature = "tracing")]
            tracing::warn!(errors = child_result.errors().len(), "transaction: child failed, rolling back");
            scope.rollback();
            let outcomes = self
                .on_failure
                .iter()
                .map(|cb| CallbackOutcome::Resolved(Box::new(invoke_failure_callback(cb, &child_result))))
                .collect();
            return child_result.with_on_failure(outcomes);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("transaction: child succeeded, committing");
        scope.commit();

        let sync = sync_callbacks();
        let result_params = child_result.params().to_vec();
        let result_context = child_result.context().clone();
        let outcomes = self
            .on_success
            .iter()
            .map(|cb| {
                if sync {
                    CallbackOutcome::Resolved(Box::new(invoke_success_callback(
                        cb,
                        &result_params,
                        &result_context,
                    )))
                } else {
                    spawn_async_callback(cb.clone(), result_params.clone(), result_context.clone())
                }
            })
            .collect();
        child_result.with_on_success(outcomes)
    }

    fn signature(&self) -> Signature {
        self.child.signature()
    }

    fn debug_name(&self) -> &str {
        "Transaction"
    }
}

/// Submits `callback` to the worker pool, returning a [`CallbackOutcome::Pending`] handle the
/// caller can `.join()` or `.await`. The current sync/async mode is captured and re-established
/// on the worker thread so a nested `Transaction` invoked from inside the callback body
/// inherits it, rather than silently reverting to the default.
fn spawn_async_callback(callback: ComponentRef, params: Vec<Value>, context: Context) -> CallbackOutcome {
    let handle = CallbackHandle::pending();
    let captured_sync = sync_callbacks();
    let pool = match WorkerPool::get_or_init() {
        Ok(pool) => pool,
        Err(err) => {
            handle.resolve(OperationResult::failure(
                callback.clone(),
                vec![crate::types::error::Error::code(crate::types::error::codes::INVALID)
                    .with_message(err.message().to_string())],
            ));
            return CallbackOutcome::Pending(handle);
        }
    };
    let job_handle = Arc::clone(&handle);
    pool.submit(Box::new(move || {
        let result = with_sync_callbacks(captured_sync, || {
            invoke_success_callback(&callback, &params, &context)
        });
        job_handle.resolve(result);
    }));
    CallbackOutcome::Pending(handle)
}
