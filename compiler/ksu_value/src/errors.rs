//! Error types for the ksu runtime.
//!
//! Every runtime failure is a typed `EvalErrorKind`. The runtime never
//! recovers from one: errors propagate with `?` out of the trampoline and are
//! collapsed to a single fatal diagnostic at the process boundary. The kinds
//! exist so that diagnostics name the actual condition and tests can match on
//! it.
//!
//! Factory functions (e.g. `division_by_zero()`) are the only way errors are
//! created; they populate both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: String,
    },

    // Operand types
    TypeError {
        operation: String,
        expected: String,
        got: String,
    },
    NotAPair {
        operation: String,
        got: String,
    },
    NotABox {
        operation: String,
        got: String,
    },
    NotAString {
        operation: String,
        got: String,
    },
    UnsupportedComparison {
        operation: String,
        type_name: String,
    },

    // Boxes
    EmptyBox {
        operation: String,
    },
    BoxOfBox,

    // Lists
    MalformedList {
        operation: String,
        got: String,
    },
    IndexOutOfRange {
        index: i64,
    },

    // Variables and calls
    UnboundVariable {
        name: String,
    },
    CallOnNonClosure {
        got: String,
    },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // User-requested failure
    Raised {
        rendering: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }

            // Operand types
            Self::TypeError {
                operation,
                expected,
                got,
            } => write!(f, "{operation} expects {expected}, got {got}"),
            Self::NotAPair { operation, got } => {
                write!(f, "{operation} expects a pair, got {got}")
            }
            Self::NotABox { operation, got } => write!(f, "{operation} expects a box, got {got}"),
            Self::NotAString { operation, got } => {
                write!(f, "{operation} expects a string, got {got}")
            }
            Self::UnsupportedComparison {
                operation,
                type_name,
            } => write!(f, "{operation} cannot compare two {type_name} values"),

            // Boxes
            Self::EmptyBox { operation } => write!(f, "{operation} on an empty box"),
            Self::BoxOfBox => write!(f, "a box cannot contain another box"),

            // Lists
            Self::MalformedList { operation, got } => {
                write!(f, "{operation} expects a proper list, found {got} in tail position")
            }
            Self::IndexOutOfRange { index } => write!(f, "list index {index} out of range"),

            // Variables and calls
            Self::UnboundVariable { name } => write!(f, "unbound variable: {name}"),
            Self::CallOnNonClosure { got } => write!(f, "cannot call a non-closure value ({got})"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }

            Self::Raised { rendering } => write!(f, "raise: {rendering}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Arithmetic Errors

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Checked integer arithmetic overflowed.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Operand Type Errors

/// Operand of the wrong type, e.g. `+` applied to a boolean.
///
/// `expected` reads as a noun phrase ("a number", "a boolean").
#[cold]
pub fn type_error(operation: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        operation: operation.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn not_a_pair(operation: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAPair {
        operation: operation.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn not_a_box(operation: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotABox {
        operation: operation.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn not_a_string(operation: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAString {
        operation: operation.to_string(),
        got: got.to_string(),
    })
}

/// Both operands share a tag that `=`/`!=` do not compare (pairs, closures, boxes).
#[cold]
pub fn unsupported_comparison(operation: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedComparison {
        operation: operation.to_string(),
        type_name: type_name.to_string(),
    })
}

// Box Errors

/// Reading an empty box.
#[cold]
pub fn empty_box(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyBox {
        operation: operation.to_string(),
    })
}

/// A box was about to end up inside a box.
#[cold]
pub fn box_of_box() -> EvalError {
    EvalError::from_kind(EvalErrorKind::BoxOfBox)
}

// List Errors

/// A walk that requires a proper list reached a non-pair, non-nil tail.
#[cold]
pub fn malformed_list(operation: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedList {
        operation: operation.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn index_out_of_range(index: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index })
}

// Variable and Call Errors

/// No binding with this name in the captured environment.
#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn call_on_non_closure(got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallOnNonClosure {
        got: got.to_string(),
    })
}

/// Wrong number of arguments (continuation included) passed to `name`.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Failure requested by the program through `raise`.
#[cold]
pub fn raised(rendering: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Raised {
        rendering: rendering.to_string(),
    })
}
