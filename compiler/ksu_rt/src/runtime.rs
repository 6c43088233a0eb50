//! Runtime configuration and the entry point for running programs.
//!
//! ```text
//! let runtime = Runtime::builder().print_handler(buffer_handler()).build();
//! let value = runtime.call(&main, args![primitive("halt")?])?;
//! let printed = runtime.print_handler().captured();
//! ```

use std::sync::Arc;

use ksu_value::{apply_closure, Args, EvalResult, Thunk, Value};

use crate::exit::{fatal, run_to_exit};
use crate::logging::init_tracing;
use crate::print_handler::{set_print_handler, stdout_handler, SharedPrintHandler};
use crate::trampoline::trampoline;

/// Settings for a [`Runtime`].
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Where `print` writes during a run.
    pub print_handler: SharedPrintHandler,
    /// Call [`init_tracing`] before the first run.
    pub init_tracing: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            print_handler: stdout_handler(),
            init_tracing: true,
        }
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the print handler used while running.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.config.print_handler = handler;
        self
    }

    /// Enable or disable tracing initialisation.
    #[must_use]
    pub fn init_tracing(mut self, enabled: bool) -> Self {
        self.config.init_tracing = enabled;
        self
    }

    pub fn build(self) -> Runtime {
        Runtime {
            config: self.config,
        }
    }
}

/// Runs thunks to completion under one configuration.
pub struct Runtime {
    config: RuntimeConfig,
}

impl Default for Runtime {
    fn default() -> Self {
        RuntimeBuilder::new().build()
    }
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.config.print_handler
    }

    /// Drive `thunk` to completion with this runtime's print handler active.
    ///
    /// The previously active handler is restored afterwards, on success or
    /// error.
    pub fn run(&self, thunk: Thunk) -> EvalResult {
        if self.config.init_tracing {
            init_tracing();
        }
        let _guard = ActiveHandlerGuard::install(Arc::clone(&self.config.print_handler));
        trampoline(thunk)
    }

    /// Apply `f` to `args` and run it to completion.
    pub fn call(&self, f: &Value, args: Args) -> EvalResult {
        self.run(apply_closure(f, args)?)
    }

    /// Apply `f` to `args`, run it, and end the process with the outcome.
    pub fn call_to_exit(&self, f: &Value, args: Args) -> ! {
        match apply_closure(f, args) {
            Ok(thunk) => {
                if self.config.init_tracing {
                    init_tracing();
                }
                let _guard = ActiveHandlerGuard::install(Arc::clone(&self.config.print_handler));
                run_to_exit(thunk)
            }
            Err(err) => fatal(&err),
        }
    }
}

/// Restores the previously active print handler when dropped.
struct ActiveHandlerGuard {
    previous: Option<SharedPrintHandler>,
}

impl ActiveHandlerGuard {
    fn install(handler: SharedPrintHandler) -> Self {
        ActiveHandlerGuard {
            previous: Some(set_print_handler(handler)),
        }
    }
}

impl Drop for ActiveHandlerGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_print_handler(previous);
        }
    }
}

#[cfg(test)]
mod tests;
