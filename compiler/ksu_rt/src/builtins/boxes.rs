//! Mutable cells: `box set! unwrap peek`.
//!
//! Values cross a box boundary by deep copy in both directions (`box`, `set!`,
//! `unwrap`). `peek` is the one read that hands out the stored value itself.

use ksu_value::{not_a_box, Args, BoxCell, Environment, EvalError, Thunk, Value};

use super::{operands, resume};

fn expect_box<'a>(operation: &str, value: &'a Value) -> Result<&'a BoxCell, EvalError> {
    value
        .as_box()
        .ok_or_else(|| not_a_box(operation, value.type_name()))
}

pub(super) fn make_box(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [content, k] = operands::<2>("box", args)?;
    resume(&k, Value::boxed(&content)?)
}

/// `set!(box, value)`: replaces the content, continues with nil.
pub(super) fn set(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [target, value, k] = operands::<3>("set!", args)?;
    expect_box("set!", &target)?.store(&value)?;
    resume(&k, Value::Nil)
}

pub(super) fn unwrap(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [target, k] = operands::<2>("unwrap", args)?;
    let content = expect_box("unwrap", &target)?.copy_out("unwrap")?;
    resume(&k, content)
}

pub(super) fn peek(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [target, k] = operands::<2>("peek", args)?;
    let content = expect_box("peek", &target)?.peek("peek")?;
    resume(&k, content)
}
