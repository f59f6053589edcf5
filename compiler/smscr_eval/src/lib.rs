//! Interpreter for the smscr template language.
//!
//! # Components
//!
//! - [`DynValue`] / [`ValueCell`]: dynamic values with in-place arithmetic
//! - [`ScopedStore`]: per-name binding stacks for loop variables
//! - [`ExecutionContext`]: output sink and parameter maps, with
//!   [`RequestContext`] as the concrete request-scoped implementation
//! - [`Interpreter`] / [`execute`]: renders a parsed document
//!
//! A parsed [`DocumentNode`](smscr_ir::DocumentNode) is immutable, so one
//! document can be rendered concurrently by independent interpreters, each
//! with its own context.

mod builtins;
mod context;
mod decfmt;
mod echo_stack;
mod errors;
mod interpreter;
mod scoped_store;
mod shared;
mod value;

pub use builtins::Builtin;
pub use context::{ContextError, Cookie, ExecutionContext, RequestContext};
pub use decfmt::{format_decimal, DecimalPattern};
pub use echo_stack::EchoStack;
pub use errors::{ArithmeticError, EvalError, EvalResult, StackUnderflow};
pub use interpreter::{execute, Interpreter};
pub use scoped_store::ScopedStore;
pub use shared::{PersistentParameters, SharedBuffer};
pub use value::{DynValue, ValueCell};
