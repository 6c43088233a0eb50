//! Tag tests. None of these fail on their operand.

use ksu_value::{Args, Environment, EvalError, Thunk, Value};

use super::{operands, resume};

fn test_tag(name: &'static str, args: Args, test: fn(&Value) -> bool) -> Result<Thunk, EvalError> {
    let [value, k] = operands::<2>(name, args)?;
    resume(&k, Value::Boolean(test(&value)))
}

pub(super) fn is_pair(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("pair?", args, |v| matches!(v, Value::Pair(_)))
}

pub(super) fn is_nil(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("nil?", args, Value::is_nil)
}

pub(super) fn is_bool(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("bool?", args, |v| matches!(v, Value::Boolean(_)))
}

pub(super) fn is_number(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("number?", args, |v| matches!(v, Value::Number(_)))
}

pub(super) fn is_symbol(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("symbol?", args, |v| matches!(v, Value::Symbol(_)))
}

pub(super) fn is_string(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("string?", args, |v| matches!(v, Value::Str(_)))
}

pub(super) fn is_closure(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("closure?", args, |v| matches!(v, Value::Closure(_)))
}

/// `list?`: true when the `second` chain ends in nil.
pub(super) fn is_list(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    test_tag("list?", args, Value::is_proper_list)
}
