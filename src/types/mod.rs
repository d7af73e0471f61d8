//! Core data types: the opaque [`Value`]/[`OrderedMap`] payload, addressing [`Path`]s,
//! the [`Error`] record, [`Signature`]/[`Arity`], and [`OperationResult`] itself.

pub mod error;
pub mod path;
pub mod result;
pub mod signature;
pub mod value;

pub use error::{codes, Error};
pub use path::{Path, PathAtom};
pub use result::{CallbackOutcome, OperationResult, ResultDelta};
pub use signature::{either_arity, fanout_arity, Arity, Signature};
pub use value::{Key, OrderedMap, Value};
