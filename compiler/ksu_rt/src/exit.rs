//! The process boundary.
//!
//! Inside the runtime every failure is a typed `EvalError`. Here they all
//! collapse into one outcome: a `Runtime error:` line on stderr and exit
//! status 1.

use std::process;

use ksu_value::{EvalError, EvalResult, Thunk};

use crate::trampoline::trampoline;

/// Exit status for a finished run.
pub fn exit_status(result: &EvalResult) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// The line written to stderr for a fatal error.
pub fn fatal_message(err: &EvalError) -> String {
    format!("Runtime error: {err}")
}

/// Report `err` and terminate the process.
pub fn fatal(err: &EvalError) -> ! {
    tracing::debug!(kind = ?err.kind, "fatal runtime error");
    eprintln!("{}", fatal_message(err));
    process::exit(1)
}

/// Drive `thunk` to completion and exit: status 0 when it finishes, or
/// through [`fatal`] on the first error.
pub fn run_to_exit(thunk: Thunk) -> ! {
    let result = trampoline(thunk);
    if let Err(err) = &result {
        fatal(err);
    }
    process::exit(exit_status(&result))
}
