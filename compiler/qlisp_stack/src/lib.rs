//! Stack safety for deeply recursive evaluation.
//!
//! qlisp has no tail-call elimination: every closure application and every
//! nested list costs host stack frames. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] moves the recursion onto heap-allocated stack
//! segments once the current segment runs low, so programs like a naive
//! `(fact 20000)` run instead of aborting the process.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack with `stacker`.
//! - **WASM targets**: passthrough.
//!
//! # Configuration
//!
//! - **Red zone**: 128KB. Below this much remaining stack, a new segment is allocated.
//! - **Segment size**: 2MB per growth.

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn evaluate(&mut self, env: &Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| self.evaluate_inner(env, value))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left in the current segment, if the platform can tell.
///
/// Used by the evaluator's trace output to show how close a deep call chain
/// is to needing a new segment.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// WASM version: unknown.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
