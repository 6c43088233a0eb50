//! Composite payloads: pairs, closures and boxes.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use super::{Heap, Value};
use crate::environment::Environment;
use crate::errors::{empty_box, EvalError, EvalResult};
use crate::thunk::Code;

/// A pair. Both slots are always populated; there is no partially built pair.
pub struct PairValue {
    first: Value,
    second: Value,
}

impl PairValue {
    pub(super) fn new(first: Value, second: Value) -> Self {
        PairValue { first, second }
    }

    #[inline]
    pub fn first(&self) -> &Value {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &Value {
        &self.second
    }

    /// Move both slots out, leaving nil behind.
    fn release_slots(&mut self, pending: &mut Vec<Value>) {
        defer(mem::replace(&mut self.first, Value::Nil), pending);
        defer(mem::replace(&mut self.second, Value::Nil), pending);
    }
}

impl Drop for PairValue {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.release_slots(&mut pending);
        release(pending);
    }
}

/// Queue `value` for [`release`] if dropping it could recurse.
pub(crate) fn defer(value: Value, pending: &mut Vec<Value>) {
    if matches!(value, Value::Pair(_) | Value::Closure(_) | Value::Box(_)) {
        pending.push(value);
    }
}

/// Drop values without recursing on the native stack.
///
/// Pairs, closure environments and boxes own further values, and the default
/// drop glue would recurse once per link of a continuation chain or nested
/// pair. Each uniquely owned payload has its children moved onto the
/// worklist before its shell is dropped; shared payloads only lose a
/// reference.
pub(crate) fn release(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        match value {
            Value::Pair(heap) => {
                if let Ok(mut pair) = Heap::try_unwrap(heap) {
                    pair.release_slots(&mut pending);
                }
            }
            Value::Closure(mut closure) => closure.env.release_bindings(&mut pending),
            Value::Box(mut cell) => cell.release_content(&mut pending),
            Value::Number(_)
            | Value::Boolean(_)
            | Value::Nil
            | Value::Str(_)
            | Value::Symbol(_) => {}
        }
    }
}

/// A closure: a code reference plus the environment captured at creation.
///
/// The environment is shared, not owned: every closure created from the same
/// lexical scope may hold the same snapshot.
#[derive(Clone)]
pub struct ClosureValue {
    code: Code,
    env: Environment,
}

impl ClosureValue {
    pub(super) fn new(code: Code, env: Environment) -> Self {
        ClosureValue { code, env }
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Same code reference and same captured environment.
    pub fn same_behavior(&self, other: &ClosureValue) -> bool {
        self.code as usize == other.code as usize && Environment::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for ClosureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureValue")
            .field("code", &format_args!("{:#x}", self.code as usize))
            .field("env", &self.env)
            .finish()
    }
}

/// The mutable cell behind `box`, `set!`, `unwrap` and `peek`.
///
/// Copy-in/copy-out: the content is always a deep copy of what was stored, so
/// later mutation of the box never reaches the caller's value and vice versa.
/// Cloning a `BoxCell` shares the cell; that sharing is how `set!` through one
/// closure becomes visible through another.
#[derive(Clone)]
pub struct BoxCell(Rc<RefCell<Option<Value>>>);

impl BoxCell {
    pub(super) fn new(content: Option<Value>) -> Self {
        BoxCell(Rc::new(RefCell::new(content)))
    }

    /// Store a deep copy of `value`, replacing the previous content.
    ///
    /// Fails with `BoxOfBox` when `value` is, or contains, a box.
    pub fn store(&self, value: &Value) -> Result<(), EvalError> {
        let copy = value.deep_copy()?;
        *self.0.borrow_mut() = Some(copy);
        Ok(())
    }

    /// A deep copy of the content; the caller cannot alias the cell's storage.
    pub fn copy_out(&self, operation: &str) -> EvalResult {
        match &*self.0.borrow() {
            Some(content) => content.deep_copy(),
            None => Err(empty_box(operation)),
        }
    }

    /// The content itself, sharing the cell's heap storage.
    ///
    /// Copy-avoiding read access. Values are immutable apart from boxes and a
    /// box never holds a box, so the shared view cannot be used to mutate the
    /// cell.
    pub fn peek(&self, operation: &str) -> EvalResult {
        self.0.borrow().clone().ok_or_else(|| empty_box(operation))
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }

    /// Whether two handles refer to the same cell.
    pub fn ptr_eq(a: &BoxCell, b: &BoxCell) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Move the content out if this is the last handle to the cell.
    fn release_content(&mut self, pending: &mut Vec<Value>) {
        if let Some(content) = Rc::get_mut(&mut self.0).and_then(|cell| cell.get_mut().take()) {
            defer(content, pending);
        }
    }
}

impl Drop for BoxCell {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.release_content(&mut pending);
        release(pending);
    }
}

impl fmt::Debug for BoxCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0.borrow() {
            Some(content) => f.debug_tuple("BoxCell").field(content).finish(),
            None => f.write_str("BoxCell(<empty>)"),
        }
    }
}
