//! The crate's two non-pipeline error categories: configuration/contract violations that
//! are fatal rather than carried as pipeline [`crate::types::Error`] records, and the
//! strict-mode failure produced by [`crate::strict::CallStrict`].

use crate::types::result::OperationResult;
use core::fmt;

/// A fatal, non-recoverable configuration or contract violation — an invalid
/// `CALLBACK_THREADS` value, a malformed callable return shape. Never a pipeline `Error`;
/// these are raised immediately — returned from a fallible initializer or used as a
/// `panic!` payload, per call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgrammingError {
    message: String,
}

impl ProgrammingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProgrammingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "programming error: {}", self.message)
    }
}

impl std::error::Error for ProgrammingError {}

/// Raised by [`crate::strict::CallStrict::call_strict`] when the wrapped component's
/// `OperationResult` is a failure. Carries the full result for inspection.
#[derive(Clone, Debug)]
pub struct OperationFailed(pub OperationResult);

impl fmt::Display for OperationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation failed with {} error(s)", self.0.errors().len())
    }
}

impl std::error::Error for OperationFailed {}
