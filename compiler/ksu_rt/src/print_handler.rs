//! Where `print` output goes.
//!
//! Primitives are plain `fn` pointers with no context parameter, so the
//! handler `print` writes through is a thread-local. `Runtime::run` installs
//! its configured handler for the duration of a run.

use std::cell::RefCell;
use std::sync::Arc;

use parking_lot::Mutex;

/// Line buffer for capturing printed values.
#[derive(Default)]
pub struct BufferPrintHandler {
    lines: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut lines = self.lines.lock();
        lines.push_str(msg);
        lines.push('\n');
    }

    /// Everything printed so far, one rendering per line.
    pub fn contents(&self) -> String {
        self.lines.lock().clone()
    }
}

/// Output destination for `print`.
pub enum PrintHandlerImpl {
    Stdout,
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => buffer.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output, or `None` if this handler does not capture.
    pub fn captured(&self) -> Option<String> {
        match self {
            Self::Buffer(buffer) => Some(buffer.contents()),
            Self::Stdout | Self::Silent => None,
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

thread_local! {
    static ACTIVE: RefCell<SharedPrintHandler> = RefCell::new(stdout_handler());
}

/// The handler `print` writes to on this thread.
pub fn active_print_handler() -> SharedPrintHandler {
    ACTIVE.with(|active| Arc::clone(&active.borrow()))
}

/// Make `handler` the active handler on this thread, returning the previous one.
pub fn set_print_handler(handler: SharedPrintHandler) -> SharedPrintHandler {
    ACTIVE.with(|active| active.replace(handler))
}

pub(crate) fn print_line(msg: &str) {
    ACTIVE.with(|active| active.borrow().println(msg));
}

#[cfg(test)]
mod tests;
