//! Pair construction and access: `pair fst snd car cdr`.

use ksu_value::{not_a_pair, Args, Environment, EvalError, Thunk, Value};

use super::{operands, resume};

/// The pair takes its operands as they are; no copy is made.
pub(super) fn pair(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [first, second, k] = operands::<3>("pair", args)?;
    resume(&k, Value::pair(first, second))
}

fn first_of(name: &'static str, args: Args) -> Result<Thunk, EvalError> {
    let [p, k] = operands::<2>(name, args)?;
    match &p {
        Value::Pair(pair) => resume(&k, pair.first().clone()),
        other => Err(not_a_pair(name, other.type_name())),
    }
}

fn second_of(name: &'static str, args: Args) -> Result<Thunk, EvalError> {
    let [p, k] = operands::<2>(name, args)?;
    match &p {
        Value::Pair(pair) => resume(&k, pair.second().clone()),
        other => Err(not_a_pair(name, other.type_name())),
    }
}

pub(super) fn fst(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    first_of("fst", args)
}

pub(super) fn snd(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    second_of("snd", args)
}

pub(super) fn car(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    first_of("car", args)
}

pub(super) fn cdr(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    second_of("cdr", args)
}
