//! Ordering (`< > <= >=`) and equality (`= !=`).
//!
//! Equality follows one rule for both operators: values with different tags
//! are unequal; numbers, booleans, strings, symbols and nil compare by
//! payload; two pairs, two closures or two boxes cannot be compared. `!=` is
//! the negation of `=` with the same failures.

use ksu_value::{unsupported_comparison, Args, Environment, EvalError, Thunk, Value};

use super::{expect_number, operands, resume};

fn ordering(
    name: &'static str,
    args: Args,
    op: fn(&i64, &i64) -> bool,
) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>(name, args)?;
    let result = op(&expect_number(name, &a)?, &expect_number(name, &b)?);
    resume(&k, Value::Boolean(result))
}

pub(super) fn lt(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    ordering("<", args, i64::lt)
}

pub(super) fn gt(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    ordering(">", args, i64::gt)
}

pub(super) fn le(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    ordering("<=", args, i64::le)
}

pub(super) fn ge(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    ordering(">=", args, i64::ge)
}

/// Language-level equality of two values.
fn values_equal(operation: &str, a: &Value, b: &Value) -> Result<bool, EvalError> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x == y),
        (Value::Boolean(x), Value::Boolean(y)) => Ok(x == y),
        (Value::Str(x), Value::Str(y)) | (Value::Symbol(x), Value::Symbol(y)) => Ok(x == y),
        (Value::Nil, Value::Nil) => Ok(true),
        (Value::Pair(_), Value::Pair(_))
        | (Value::Closure(_), Value::Closure(_))
        | (Value::Box(_), Value::Box(_)) => Err(unsupported_comparison(operation, a.type_name())),
        _ => Ok(false),
    }
}

pub(super) fn eq(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>("=", args)?;
    let result = values_equal("=", &a, &b)?;
    resume(&k, Value::Boolean(result))
}

pub(super) fn ne(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>("!=", args)?;
    let result = !values_equal("!=", &a, &b)?;
    resume(&k, Value::Boolean(result))
}
