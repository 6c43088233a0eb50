//! Output and user-raised failure.

use ksu_value::{raised, Args, Environment, EvalError, Thunk, Value};

use super::{operands, resume};
use crate::print_handler::print_line;

/// `print(value)`: writes the rendering and a newline, continues with nil.
pub(super) fn print(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [value, k] = operands::<2>("print", args)?;
    print_line(&value.to_string());
    resume(&k, Value::Nil)
}

/// `raise(value)`: ends the run with a `Raised` error. The continuation is
/// accepted for uniformity and never resumed.
pub(super) fn raise(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [value, _k] = operands::<2>("raise", args)?;
    Err(raised(&value.to_string()))
}
