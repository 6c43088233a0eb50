//! The primitive library.
//!
//! Every primitive is `Code`: it receives its operands followed by a
//! continuation `k`, computes its result, and returns
//! `apply_closure(k, [result])` rather than the value itself. Primitives are
//! closures over the empty environment and are called exactly like
//! generated code.
//!
//! Primitives check their argument count (continuation included) and fail
//! with `ArityMismatch` otherwise.

mod arithmetic;
mod boxes;
mod comparison;
mod control;
mod io;
mod lists;
mod logic;
mod pairs;
mod predicates;
mod symbols;
mod table;

pub use table::{primitive, primitive_names};

use ksu_value::{apply_closure, args, arity_mismatch, type_error, Args, EvalError, Thunk, Value};

/// Split `args` into exactly `N` values, or fail with `ArityMismatch`.
///
/// ```text
/// let [a, b, k] = operands::<3>("+", args)?;
/// ```
fn operands<const N: usize>(name: &str, args: Args) -> Result<[Value; N], EvalError> {
    if args.len() != N {
        return Err(arity_mismatch(name, N, args.len()));
    }
    let mut values = args.into_iter();
    Ok(std::array::from_fn(|_| values.next().unwrap_or(Value::Nil)))
}

/// Pass `result` to the continuation `k`.
#[inline]
fn resume(k: &Value, result: Value) -> Result<Thunk, EvalError> {
    apply_closure(k, args![result])
}

fn expect_number(operation: &str, value: &Value) -> Result<i64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| type_error(operation, "a number", value.type_name()))
}

fn expect_bool(operation: &str, value: &Value) -> Result<bool, EvalError> {
    value
        .as_bool()
        .ok_or_else(|| type_error(operation, "a boolean", value.type_name()))
}
