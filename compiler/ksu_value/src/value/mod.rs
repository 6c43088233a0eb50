//! Runtime values for the ksu runtime.
//!
//! # Heap Enforcement
//!
//! All heap allocations go through factory methods on `Value`. `Heap<T>` has
//! a private constructor, so code outside this module cannot build heap
//! values directly.
//!
//! ```text
//! let s = Value::string("hello");                       // OK
//! let p = Value::pair(Value::Number(1), Value::Nil);     // OK
//! let s = Value::Str(Heap::new(...));                    // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Copy Semantics
//!
//! `Clone` shares heap storage (a reference-count bump). `deep_copy` builds
//! disjoint storage and is what boxes use on the way in and out.

mod composite;
mod copy;
mod display;
mod heap;

use std::fmt;

use ksu_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{box_of_box, EvalResult};
use crate::thunk::Code;

pub(crate) use composite::{defer, release};
pub use composite::{BoxCell, ClosureValue, PairValue};
pub use heap::Heap;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Immediates
    /// Machine integer.
    Number(i64),
    Boolean(bool),
    /// The empty list.
    Nil,

    // Heap Types
    /// Text, printed quoted.
    Str(Heap<String>),
    /// Symbol name, printed with a leading `'`.
    Symbol(Heap<String>),
    /// Pair of two values; lists are `second`-chains ending in `Nil`.
    Pair(Heap<PairValue>),
    /// Code reference plus captured environment.
    Closure(ClosureValue),
    /// Mutable single-slot cell.
    Box(BoxCell),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a symbol value.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    /// Create a pair. The pair takes both values as they are; no copy is made.
    #[inline]
    pub fn pair(first: Value, second: Value) -> Self {
        Value::Pair(Heap::new(PairValue::new(first, second)))
    }

    /// Create a proper list from `items`, ending in `Nil`.
    ///
    /// ```text
    /// let l = Value::list([Value::Number(1), Value::Number(2)]); // 1 . 2 . nil
    /// ```
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |tail, item| Value::pair(item, tail))
    }

    /// Create a closure over `env`. The environment is shared, not copied.
    #[inline]
    pub fn closure(code: Code, env: Environment) -> Self {
        Value::Closure(ClosureValue::new(code, env))
    }

    /// Create a box holding a deep copy of `content`.
    ///
    /// Fails with `BoxOfBox` if `content` is, or contains, a box.
    pub fn boxed(content: &Value) -> EvalResult {
        if let Value::Box(_) = content {
            return Err(box_of_box());
        }
        Ok(Value::Box(BoxCell::new(Some(content.deep_copy()?))))
    }

    /// Create a box with no content yet.
    ///
    /// Generated code uses this to tie recursive knots: the box is captured
    /// first and filled with `set!` once the closure exists.
    #[inline]
    pub fn empty_box() -> Self {
        Value::Box(BoxCell::new(None))
    }
}

// Accessors

impl Value {
    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_pair(&self) -> Option<&PairValue> {
        match self {
            Value::Pair(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn as_closure(&self) -> Option<&ClosureValue> {
        match self {
            Value::Closure(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_box(&self) -> Option<&BoxCell> {
        match self {
            Value::Box(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Tag name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Nil => "nil",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Pair(_) => "pair",
            Value::Closure(_) => "closure",
            Value::Box(_) => "box",
        }
    }

    /// Whether the `second` chain starting here ends in `Nil`.
    pub fn is_proper_list(&self) -> bool {
        let mut cursor = self;
        while let Value::Pair(pair) = cursor {
            cursor = pair.second();
        }
        cursor.is_nil()
    }
}

impl PartialEq for Value {
    /// Structural equality: payloads for immediates, strings, symbols and
    /// pairs; identity for closures (code and environment) and boxes (cell).
    ///
    /// This is the Rust-side comparison used by tests and embedders; the
    /// language-level `=` is stricter (see the comparison primitives).
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            match (left, right) {
                (Value::Pair(a), Value::Pair(b)) => {
                    if Heap::ptr_eq(a, b) {
                        return true;
                    }
                    if !ensure_sufficient_stack(|| a.first() == b.first()) {
                        return false;
                    }
                    left = a.second();
                    right = b.second();
                }
                (Value::Number(a), Value::Number(b)) => return a == b,
                (Value::Boolean(a), Value::Boolean(b)) => return a == b,
                (Value::Nil, Value::Nil) => return true,
                (Value::Str(a), Value::Str(b)) | (Value::Symbol(a), Value::Symbol(b)) => {
                    return a == b
                }
                (Value::Closure(a), Value::Closure(b)) => return a.same_behavior(b),
                (Value::Box(a), Value::Box(b)) => return BoxCell::ptr_eq(a, b),
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Symbol(s) => write!(f, "Symbol({:?})", s.as_str()),
            Value::Pair(p) => ensure_sufficient_stack(|| {
                f.debug_tuple("Pair")
                    .field(p.first())
                    .field(p.second())
                    .finish()
            }),
            Value::Closure(c) => fmt::Debug::fmt(c, f),
            Value::Box(b) => fmt::Debug::fmt(b, f),
        }
    }
}

#[cfg(test)]
mod tests;
