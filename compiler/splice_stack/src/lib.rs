//! Stack safety utilities for deep recursion.
//!
//! The scanner and the evaluator re-enter each other once per nesting level
//! of the source (a list literal inside a call inside an index, and so on).
//! Two guards keep that recursion from taking the process down:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so a
//!   legitimately deep expression never overflows.
//! - [`DepthLimit`] puts an explicit budget on the nesting depth, so a
//!   pathological input fails with an error instead of allocating stack
//!   segments without bound.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

use std::fmt;

/// Minimum stack space to keep available (100KB red zone).
///
/// If less than this amount remains, we'll grow the stack.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, this will
/// allocate additional stack space before calling `f`.
///
/// # Example
///
/// ```text
/// fn parse_item(cursor: &mut Cursor<'_>) -> ScanResult<Value> {
///     ensure_sufficient_stack(|| {
///         // ... may recurse into parse_argument_list ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Budget on how many nesting levels a single scan may enter.
///
/// The limit is a plain value carried by configuration; the current depth
/// lives with whoever is recursing (the scanner keeps it in its cursor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepthLimit {
    max: u32,
}

impl DepthLimit {
    /// Default budget: deep enough for any hand-written script.
    pub const DEFAULT: Self = Self { max: 256 };

    /// Create a limit allowing at most `max` nested levels.
    pub const fn new(max: u32) -> Self {
        Self { max }
    }

    /// The maximum number of nested levels.
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Depth after entering one more level from `depth`.
    ///
    /// Fails once `depth` has already used up the budget.
    pub fn descend(self, depth: u32) -> Result<u32, DepthExceeded> {
        if depth >= self.max {
            return Err(DepthExceeded { limit: self.max });
        }
        Ok(depth + 1)
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returned by [`DepthLimit::descend`] when the budget is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The limit that was hit.
    pub limit: u32,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum nesting depth exceeded (limit: {})", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}
