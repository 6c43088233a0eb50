#![deny(clippy::arithmetic_side_effects)]
//! Ksu Value - the data side of the ksu runtime.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, `PairValue`, `ClosureValue`, `BoxCell`)
//! - Captured environments (`Environment`), flat snapshots built once per closure
//! - Pending calls (`Thunk`, `PendingCall`, `Args`, `Code`) and `apply_closure`,
//!   the only way to create a pending call
//! - Evaluation errors (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! The loop that drives pending calls and the primitive library live in
//! `ksu_rt`.
//!
//! # Ownership
//!
//! Heap payloads are reference counted through `Heap<T>`, whose constructor is
//! private to the value module. Cloning a `Value` shares storage; `deep_copy`
//! allocates disjoint storage. Pairs, strings and symbols are immutable once
//! built, so sharing is only observable through a `BoxCell`, the single mutable
//! cell kind.

mod environment;
mod errors;
mod thunk;
mod value;

pub use environment::{Binding, Environment, Name};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use thunk::{apply_closure, Args, Code, PendingCall, Thunk};
pub use value::{BoxCell, ClosureValue, Heap, PairValue, Value};

// Re-export error constructors for use by the runtime crate
pub use errors::{
    arity_mismatch, box_of_box, call_on_non_closure, division_by_zero, empty_box,
    index_out_of_range, integer_overflow, malformed_list, modulo_by_zero, not_a_box, not_a_pair,
    not_a_string, raised, type_error, unbound_variable, unsupported_comparison,
};

#[doc(hidden)]
pub use smallvec as __smallvec;

/// Build an [`Args`] buffer from a list of values.
///
/// ```text
/// let call = apply_closure(&k, args![Value::Number(120)])?;
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        $crate::__smallvec::smallvec![$($value),*]
    };
}
