//! `call_strict`: a raising variant for embedders that want exception-based ergonomics
//! instead of inspecting `OperationResult::is_failure` themselves.

use crate::context::Context;
use crate::error::OperationFailed;
use crate::traits::component::Component;
use crate::types::result::OperationResult;
use crate::types::value::Value;

/// Adds a raising call convention on top of any [`Component`].
pub trait CallStrict: Component {
    /// Runs the component and returns `Err` instead of a failing `OperationResult`.
    fn try_call_strict(&self, params: &[Value], context: &Context) -> Result<OperationResult, OperationFailed> {
        let result = self.call(params, context);
        if result.is_failure() {
            Err(OperationFailed(result))
        } else {
            Ok(result)
        }
    }

    /// Runs the component and panics with [`OperationFailed`] on failure.
    ///
    /// Sugar over [`CallStrict::try_call_strict`] for call sites that want exception-based
    /// "raises `OperationFailed(result)`" ergonomics directly.
    fn call_strict(&self, params: &[Value], context: &Context) -> OperationResult {
        match self.try_call_strict(params, context) {
            Ok(result) => result,
            Err(failed) => std::panic::panic_any(failed),
        }
    }
}

impl<T: Component + ?Sized> CallStrict for T {}
