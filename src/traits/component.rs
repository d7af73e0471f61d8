//! The `Component` trait: the ingress contract every combinator and leaf implements.

use crate::context::Context;
use crate::types::result::OperationResult;
use crate::types::signature::Signature;
use crate::types::value::Value;
use std::sync::Arc;

/// Anything that maps positional params plus a context to an [`OperationResult`].
///
/// Raw callables are auto-adapted by [`crate::component::Callable`]; combinators
/// (`combinators::*`, `transaction::Transaction`, `lookup::*`) implement this directly, since
/// they themselves are components.
pub trait Component: Send + Sync {
    /// Invokes the component with positional params and a context.
    fn call(&self, params: &[Value], context: &Context) -> OperationResult;

    /// The component's calling convention, used by enclosing combinators to distribute
    /// params.
    fn signature(&self) -> Signature;

    /// A human-readable name used in `ProgrammingError` messages when a callable's return
    /// value fails to normalize.
    fn debug_name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

/// A shared, reference-counted handle to a [`Component`].
///
/// This is what flows through `OperationResult::operation`/`shortcut` and what combinators
/// hold onto for their children — components are wired once and reused.
pub type ComponentRef = Arc<dyn Component>;

impl Component for ComponentRef {
    fn call(&self, params: &[Value], context: &Context) -> OperationResult {
        (**self).call(params, context)
    }

    fn signature(&self) -> Signature {
        (**self).signature()
    }

    fn debug_name(&self) -> &str {
        (**self).debug_name()
    }
}
