//! The background job queue interface (egress) — deliberately out of scope as business
//! logic, specified only at its interface.

use crate::context::Context;
use crate::types::value::Value;

/// A handle to an enqueued background job, stable enough to look up or cancel later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobId(pub String);

/// Background job enqueuing (egress, out of core).
///
/// This is the "async wrapper" deliberately kept external: a component that wants to run
/// outside the synchronous pipeline hands its invocation off here instead of calling a
/// child directly. The core does not implement a queue, worker, or retry policy for this —
/// only the shape of the call.
pub trait AsyncJobQueue: Send + Sync {
    /// Enqueues an invocation of `operation_class` / `method_name` with the given params and
    /// context, to be executed later by an out-of-process worker.
    fn enqueue(
        &self,
        operation_class: &str,
        method_name: &str,
        params: Vec<Value>,
        context: Context,
    ) -> JobId;
}
