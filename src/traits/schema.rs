//! The validation-schema DSL interface (egress) — deliberately out of scope as business
//! logic; `validator::params` is a thin adapter over this trait.

use crate::context::Context;
use crate::types::error::Error;
use crate::types::value::OrderedMap;

/// A params-contract schema engine.
///
/// Implementations own the actual predicate language (required/optional keys, type
/// coercion, nested schemas, custom predicates...); the core only needs a three-part
/// contract: validate a mapping against the schema, optionally produce a context delta, and
/// report failures as [`Error`] records.
pub trait ParamsSchema: Send + Sync {
    /// Validates `input` against the schema, given the ambient `context` (schemas may
    /// branch on context, e.g. "admin-only fields").
    ///
    /// Returns the validated/coerced mapping, a context delta to merge in, and any
    /// validation errors. A non-empty `errors` means the mapping should be treated as
    /// invalid regardless of what the first two fields contain.
    fn validate(&self, input: &OrderedMap, context: &Context) -> (OrderedMap, Context, Vec<Error>);
}
