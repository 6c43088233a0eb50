//! Native stack headroom for structural recursion.
//!
//! Closure calls never recurse on the native stack (the trampoline owns that
//! loop), but a handful of value-level walks still recurse into the `first`
//! slot of a pair: deep copy, rendering and equality of nested structure.
//! Those walks go through [`ensure_sufficient_stack`] so that a value nested
//! 100k levels deep is handled instead of aborting the process.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 128KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f` with at least the red zone of native stack available.
///
/// ```text
/// fn copy_first(value: &Value) -> EvalResult {
///     ensure_sufficient_stack(|| deep_copy(value))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
