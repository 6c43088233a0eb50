//! Checked integer arithmetic: `+ - * / mod`.

use ksu_value::{
    division_by_zero, integer_overflow, modulo_by_zero, Args, Environment, EvalError, EvalResult,
    Thunk, Value,
};

use super::{expect_number, operands, resume};

/// Checked arithmetic operation with overflow handling.
///
/// Used for `+`, `-`, `*` where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Number).ok_or_else(|| integer_overflow(op_name))
}

/// Shared shape of the binary number primitives.
fn binary(
    name: &'static str,
    args: Args,
    op: fn(i64, i64) -> EvalResult,
) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>(name, args)?;
    let result = op(expect_number(name, &a)?, expect_number(name, &b)?)?;
    resume(&k, result)
}

pub(super) fn add(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    binary("+", args, |a, b| checked_arith(a.checked_add(b), "addition"))
}

pub(super) fn sub(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    binary("-", args, |a, b| checked_arith(a.checked_sub(b), "subtraction"))
}

pub(super) fn mul(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    binary("*", args, |a, b| {
        checked_arith(a.checked_mul(b), "multiplication")
    })
}

/// Truncating division.
pub(super) fn div(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    binary("/", args, |a, b| {
        if b == 0 {
            return Err(division_by_zero());
        }
        checked_arith(a.checked_div(b), "division")
    })
}

/// Remainder; the sign follows the dividend.
pub(super) fn rem(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    binary("mod", args, |a, b| {
        if b == 0 {
            return Err(modulo_by_zero());
        }
        checked_arith(a.checked_rem(b), "remainder")
    })
}
