//! Stack safety for recursive template walks.
//!
//! The parser builds FOR nesting with an explicit container stack, but every
//! consumer of the finished tree (the serializer, the interpreter, any
//! visitor) recurses once per nested FOR. A template with tens of thousands
//! of nested loops is syntactically valid, so those walks grow the stack on
//! demand instead of overflowing it.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 64KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a new segment is
/// allocated before calling `f`.
///
/// ```text
/// fn walk_node(&mut self, node: &Node) -> Result<(), EvalError> {
///     ensure_sufficient_stack(|| match node {
///         Node::ForLoop(for_loop) => self.visit_for_loop(for_loop),
///         // ...
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
