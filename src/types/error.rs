//! The pipeline's structured failure record.

use crate::traits::component::ComponentRef;
use crate::types::path::Path;
use crate::types::value::OrderedMap;
use core::fmt;
use std::borrow::Cow;

/// A single structured failure produced by a component invocation.
///
/// Construct with [`Error::code`] or [`Error::message`], then layer on `.with_*` calls.
/// Carries a [`Path`] instead of a context stack, since a pipeline `Error`'s defining feature
/// is *where* in the input it occurred, not a chain of wrapping contexts.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error {
    #[cfg_attr(feature = "serde", serde(skip))]
    producer: Option<ComponentRef>,
    code: Option<Cow<'static, str>>,
    message: Option<String>,
    path: Path,
    tokens: OrderedMap,
}

impl Error {
    /// Starts building an `Error` with a symbolic code (the invariant "either code or
    /// message is set" is satisfied by every constructor; builders only ever add fields).
    #[must_use]
    pub fn code(code: impl Into<Cow<'static, str>>) -> Self {
        Self { producer: None, code: Some(code.into()), message: None, path: Path::root(), tokens: OrderedMap::new() }
    }

    /// Starts building an `Error` with a human-readable message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self { producer: None, code: None, message: Some(message.into()), path: Path::root(), tokens: OrderedMap::new() }
    }

    #[must_use]
    pub fn with_producer(mut self, producer: ComponentRef) -> Self {
        self.producer = Some(producer);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_tokens(mut self, tokens: OrderedMap) -> Self {
        self.tokens = tokens;
        self
    }

    #[must_use]
    pub fn with_token(mut self, key: impl Into<crate::types::value::Key>, value: impl Into<crate::types::value::Value>) -> Self {
        self.tokens.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this error with `prefix` prepended to its path.
    ///
    /// The workhorse behind Namespace and Collection error-path prefixing:
    /// `prefix.prepended_to(&self.path)` walks the prefix atoms onto the front.
    #[must_use]
    pub fn prefixed(&self, prefix: &Path) -> Self {
        Self { path: prefix.prepended_to(&self.path), ..self.clone() }
    }

    #[must_use]
    pub fn code_ref(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn message_ref(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn tokens(&self) -> &OrderedMap {
        &self.tokens
    }

    #[must_use]
    pub fn producer(&self) -> Option<&ComponentRef> {
        self.producer.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("path", &self.path)
            .field("tokens", &self.tokens)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(msg)) => write!(f, "{code}: {msg} (at {:?})", self.path),
            (Some(code), None) => write!(f, "{code} (at {:?})", self.path),
            (None, Some(msg)) => write!(f, "{msg} (at {:?})", self.path),
            (None, None) => write!(f, "<error> (at {:?})", self.path),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.path == other.path
            && self.tokens == other.tokens
    }
}

/// Well-known error codes emitted by the core.
pub mod codes {
    pub const MISSING: &str = "missing";
    pub const NOT_FOUND: &str = "not_found";
    pub const INCLUDED: &str = "included";
    pub const INVALID: &str = "invalid";
    pub const BLANK: &str = "blank";
}
