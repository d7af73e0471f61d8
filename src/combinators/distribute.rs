//! Shared param-slicing helpers for Parallel/Split, which distribute disjoint slices of
//! input params to children by arity.

use crate::types::signature::Arity;
use crate::types::value::Value;

/// Removes and returns a prefix of `remaining` sized to `arity` (the whole thing, for
/// `Unbounded`).
pub(crate) fn take_slice(arity: Arity, remaining: &mut Vec<Value>) -> Vec<Value> {
    match arity {
        Arity::Unbounded => core::mem::take(remaining),
        Arity::Fixed(n) => {
            let n = n.min(remaining.len());
            remaining.drain(0..n).collect()
        }
    }
}

/// Merges per-child params lists index-wise: position `i` becomes the key/value merge of
/// every child's value at `i` (later children win on key conflict within a `Map`; a lone
/// side's value at a position only one child reached is used as-is).
pub(crate) fn pack_by_index(children_params: Vec<Vec<Value>>) -> Vec<Value> {
    let max_len = children_params.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(max_len);
    for i in 0..max_len {
        let mut merged: Option<Value> = None;
        for child_params in &children_params {
            let Some(v) = child_params.get(i) else { continue };
            merged = Some(match (merged, v) {
                (Some(Value::Map(acc)), Value::Map(next)) => Value::Map(acc.merged_with(next)),
                (_, v) => v.clone(),
            });
        }
        out.push(merged.unwrap_or(Value::Null));
    }
    out
}
