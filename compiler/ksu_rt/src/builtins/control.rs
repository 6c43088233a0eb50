//! Control primitives: `halt` and `call/cc`.

use ksu_value::{apply_closure, args, Args, Environment, EvalError, Thunk, Value};

use super::{operands, resume};

/// `halt(value)`: ends the run with `value`. Takes no continuation.
pub(super) fn halt(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [value] = operands::<1>("halt", args)?;
    Ok(Thunk::Done(value))
}

/// `call/cc(f)`: calls `f` with the current continuation reified as a
/// closure, and with `k` as its own continuation.
pub(super) fn call_cc(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [f, k] = operands::<2>("call/cc", args)?;
    let escape = Value::closure(resume_captured, Environment::new([("k", k.clone())]));
    apply_closure(&f, args![escape, k])
}

/// Body of a reified continuation: `(v, k')` resumes the captured `k` with `v`
/// and drops `k'`.
fn resume_captured(env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [value, _discarded] = operands::<2>("continuation", args)?;
    resume(env.lookup("k")?, value)
}
