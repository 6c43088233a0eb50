//! Printed rendering of values.
//!
//! ```text
//! 1 . 2 . nil          list of 1 and 2
//! (1 . 2) . nil        list holding the pair (1 . 2)
//! "hi" . 'sym . #t     improper chain
//! ```

use std::fmt;

use ksu_stack::ensure_sufficient_stack;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self;
        while let Value::Pair(pair) = cursor {
            match pair.first() {
                first @ Value::Pair(_) => {
                    ensure_sufficient_stack(|| write!(f, "({first}) . "))?;
                }
                first => write!(f, "{first} . ")?,
            }
            cursor = pair.second();
        }
        match cursor {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(true) => f.write_str("#t"),
            Value::Boolean(false) => f.write_str("#f"),
            Value::Nil => f.write_str("nil"),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Symbol(s) => write!(f, "'{}", s.as_str()),
            Value::Closure(_) => f.write_str("<closure>"),
            Value::Box(_) => f.write_str("<box>"),
            Value::Pair(_) => Ok(()),
        }
    }
}
