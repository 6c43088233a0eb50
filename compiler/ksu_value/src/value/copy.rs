//! Deep copy: the copy-in/copy-out half of box semantics.

use ksu_stack::ensure_sufficient_stack;

use super::Value;
use crate::errors::{box_of_box, EvalResult};

impl Value {
    /// A structurally identical value sharing no mutable storage with `self`.
    ///
    /// Immediates and strings copy trivially. Pairs are rebuilt cell by cell;
    /// the `second` spine is walked iteratively so long lists do not deepen
    /// the native stack, nested `first` slots recurse under a stack guard.
    /// Closures share their code and environment (environments are never
    /// mutated after creation).
    ///
    /// Fails with `BoxOfBox` if a box is reached: a deep copy is only ever
    /// taken on the way into or out of a box, and boxes do not nest.
    pub fn deep_copy(&self) -> EvalResult {
        let mut firsts = Vec::new();
        let mut cursor = self;
        while let Value::Pair(pair) = cursor {
            firsts.push(ensure_sufficient_stack(|| pair.first().deep_copy())?);
            cursor = pair.second();
        }
        let tail = copy_leaf(cursor)?;
        Ok(firsts
            .into_iter()
            .rev()
            .fold(tail, |rest, first| Value::pair(first, rest)))
    }
}

/// Copy a non-pair value.
fn copy_leaf(value: &Value) -> EvalResult {
    match value {
        Value::Number(_)
        | Value::Boolean(_)
        | Value::Nil
        | Value::Str(_)
        | Value::Symbol(_)
        | Value::Closure(_) => Ok(value.clone()),
        Value::Box(_) => Err(box_of_box()),
        Value::Pair(_) => value.deep_copy(),
    }
}
