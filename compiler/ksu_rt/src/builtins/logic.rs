//! Boolean connectives. Both operands are already evaluated; there is no
//! short-circuiting at this level.

use ksu_value::{Args, Environment, EvalError, Thunk, Value};

use super::{expect_bool, operands, resume};

pub(super) fn and(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>("and", args)?;
    let (a, b) = (expect_bool("and", &a)?, expect_bool("and", &b)?);
    resume(&k, Value::Boolean(a && b))
}

pub(super) fn or(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [a, b, k] = operands::<3>("or", args)?;
    let (a, b) = (expect_bool("or", &a)?, expect_bool("or", &b)?);
    resume(&k, Value::Boolean(a || b))
}

pub(super) fn not(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [a, k] = operands::<2>("not", args)?;
    resume(&k, Value::Boolean(!expect_bool("not", &a)?))
}
