//! Stack safety for deep recursion.
//!
//! A chain of `n` additions nests `n` levels deep to the left. Anything that
//! walks such a tree recursively (evaluation, formatting, comparison,
//! cloning) wraps each level in [`ensure_sufficient_stack`], which moves to
//! a freshly allocated stack segment when the current one runs low.
//!
//! On wasm the closure is called directly.

/// Grow when less than this remains.
const RED_ZONE: usize = 100 * 1024; // 100KB

/// Size of each new segment.
const STACK_PER_RECURSION: usize = 1024 * 1024; // 1MB

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
