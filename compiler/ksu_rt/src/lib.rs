//! Ksu RT - the execution side of the ksu runtime.
//!
//! Compiled ksu programs are continuation-passing closures over flat
//! environments (see `ksu_value`). This crate runs them:
//!
//! - `trampoline`: the loop that drives pending calls to a final value
//! - `primitive`: the built-in library (`+`, `pair`, `box`, `print`, ...),
//!   each a closure taking a trailing continuation
//! - `Runtime` / `RuntimeBuilder`: print handler and tracing configuration
//! - `fatal` / `run_to_exit`: the process boundary, where every error becomes
//!   `Runtime error: <message>` on stderr and exit status 1
//!
//! ```text
//! let main = Value::closure(main_body, Environment::empty());
//! let halt = primitive("halt").unwrap();
//! run_to_exit(apply_closure(&main, args![halt])?);
//! ```

mod builtins;
mod exit;
mod logging;
mod print_handler;
mod runtime;
mod trampoline;

pub use builtins::{primitive, primitive_names};
pub use exit::{exit_status, fatal, fatal_message, run_to_exit};
pub use logging::init_tracing;
pub use print_handler::{
    active_print_handler, buffer_handler, set_print_handler, silent_handler, stdout_handler,
    BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use trampoline::{call, trampoline};

// The value model, so that generated code needs one dependency.
pub use ksu_value::{
    apply_closure, args, Args, Binding, BoxCell, ClosureValue, Code, Environment, EvalError,
    EvalErrorKind, EvalResult, Heap, Name, PairValue, PendingCall, Thunk, Value,
};
