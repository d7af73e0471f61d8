//! Return-value normalization: a callable's return value → [`OperationResult`].

use crate::context::Context;
use crate::traits::component::ComponentRef;
use crate::types::error::Error;
use crate::types::result::OperationResult;
use crate::types::value::{Key, OrderedMap, Value};

/// Everything a wrapped callable is allowed to hand back.
///
/// `FailureMany`'s elements must themselves be one of the single-failure cases
/// (`FailureCode` / `FailureMessage` / `FailureRecord`); anything else nested inside it is
/// a programming error.
pub enum ReturnValue {
    Result(OperationResult),
    SuccessContext(OrderedMap),
    SuccessParams(Vec<Value>, OrderedMap),
    FailureCode(Key),
    FailureMessage(String),
    FailureRecord(Error),
    FailureMany(Vec<ReturnValue>),
}

impl ReturnValue {
    /// Normalizes `self` into an `OperationResult`, seeding `operation` for the leaf cases
    /// (passed through unchanged when `self` is already `ReturnValue::Result`).
    #[must_use]
    pub fn into_result(self, operation: ComponentRef, component_name: &str) -> OperationResult {
        match self {
            ReturnValue::Result(r) => r,
            ReturnValue::SuccessContext(ctx) => {
                OperationResult::success(operation, Vec::new(), Context::from_map(ctx))
            }
            ReturnValue::SuccessParams(positionals, ctx) => {
                OperationResult::success(operation, positionals, Context::from_map(ctx))
            }
            ReturnValue::FailureCode(code) => {
                OperationResult::failure(operation, vec![Error::code(code.as_str().to_string())])
            }
            ReturnValue::FailureMessage(message) => {
                OperationResult::failure(operation, vec![Error::message(message)])
            }
            ReturnValue::FailureRecord(error) => OperationResult::failure(operation, vec![error]),
            ReturnValue::FailureMany(items) => {
                let errors = items
                    .into_iter()
                    .map(|item| item.into_single_error(component_name))
                    .collect();
                OperationResult::failure(operation, errors)
            }
        }
    }

    fn into_single_error(self, component_name: &str) -> Error {
        match self {
            ReturnValue::FailureCode(code) => Error::code(code.as_str().to_string()),
            ReturnValue::FailureMessage(message) => Error::message(message),
            ReturnValue::FailureRecord(error) => error,
            _ => panic!(
                "ProgrammingError: component `{component_name}` returned a failure list \
                 containing an element that is not itself a single failure"
            ),
        }
    }
}

impl From<OperationResult> for ReturnValue {
    fn from(r: OperationResult) -> Self {
        ReturnValue::Result(r)
    }
}

impl From<OrderedMap> for ReturnValue {
    fn from(m: OrderedMap) -> Self {
        ReturnValue::SuccessContext(m)
    }
}

impl From<Error> for ReturnValue {
    fn from(e: Error) -> Self {
        ReturnValue::FailureRecord(e)
    }
}
