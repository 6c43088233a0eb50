//! The trampoline: the one loop that runs pending calls.
//!
//! Generated code and primitives never call each other directly. Each returns
//! a `Thunk`, and this loop keeps invoking pending calls until one of them
//! produces a value, so the native stack stays flat however deep the
//! program's logical recursion goes.

use ksu_value::{apply_closure, Args, EvalResult, Thunk, Value};

/// Drive `thunk` to completion.
///
/// Each step consumes the pending call (and its argument buffer) and replaces
/// it with whatever the invoked code returned. The first error ends the run.
#[tracing::instrument(level = "debug", skip_all)]
pub fn trampoline(thunk: Thunk) -> EvalResult {
    let mut state = thunk;
    let mut steps: u64 = 0;
    loop {
        match state {
            Thunk::Done(value) => {
                tracing::debug!(steps, "trampoline finished");
                return Ok(value);
            }
            Thunk::Pending(call) => {
                steps = steps.saturating_add(1);
                state = call.invoke()?;
            }
        }
    }
}

/// Apply `f` to `args` and run it to completion.
///
/// Convenience for embedders and tests: the usual way to start a program is
/// to call its entry closure with a continuation that halts.
pub fn call(f: &Value, args: Args) -> EvalResult {
    trampoline(apply_closure(f, args)?)
}
