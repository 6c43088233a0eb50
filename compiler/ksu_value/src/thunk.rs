//! Pending calls.
//!
//! Every piece of runtime-visible code returns a `Thunk` instead of calling
//! the next closure itself: either the final value, or a `PendingCall` for
//! the trampoline to run next. Native stack depth therefore stays constant
//! no matter how deep the program's logical recursion goes.
//!
//! `PendingCall` has private fields; `apply_closure` is the only way to make
//! one, so a pending call always refers to a real closure's code.

use std::fmt;

use smallvec::SmallVec;

use crate::environment::Environment;
use crate::errors::{call_on_non_closure, EvalError};
use crate::value::Value;

/// Argument buffer for one call. Most calls pass an operand or two plus a
/// continuation, which fits inline.
pub type Args = SmallVec<[Value; 4]>;

/// Compiled code: the body of a generated function or a primitive.
///
/// Receives the closure's captured environment and owns its arguments.
pub type Code = fn(&Environment, Args) -> Result<Thunk, EvalError>;

/// Result of running one step of code.
#[derive(Debug)]
pub enum Thunk {
    /// Another call must run before there is a value.
    Pending(PendingCall),
    /// Computation finished with this value.
    Done(Value),
}

/// A suspended invocation: code, the environment it closes over, and the
/// arguments it will receive.
pub struct PendingCall {
    code: Code,
    env: Environment,
    args: Args,
}

impl PendingCall {
    /// Run the suspended code once, consuming the argument buffer.
    #[inline]
    pub fn invoke(self) -> Result<Thunk, EvalError> {
        (self.code)(&self.env, self.args)
    }
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall")
            .field("code", &format_args!("{:#x}", self.code as usize))
            .field("env", &self.env)
            .field("args", &self.args)
            .finish()
    }
}

/// Suspend a call of `f` with `args`.
///
/// Does not run anything: the returned thunk is handed back to the
/// trampoline, which invokes it.
pub fn apply_closure(f: &Value, args: Args) -> Result<Thunk, EvalError> {
    match f {
        Value::Closure(closure) => {
            tracing::trace!(argc = args.len(), "apply closure");
            Ok(Thunk::Pending(PendingCall {
                code: closure.code(),
                env: closure.env().clone(),
                args,
            }))
        }
        other => Err(call_on_non_closure(other.type_name())),
    }
}
