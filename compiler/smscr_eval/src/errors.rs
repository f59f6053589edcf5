//! Evaluation error types.
//!
//! Every failure aborts the current run. Output already written stays
//! written; nothing is rolled back.

use smscr_ir::Operator;
use thiserror::Error;

use crate::context::ContextError;

/// Failure of an arithmetic operation on dynamic values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A string operand that parses as neither an integer nor a double.
    #[error("`{value}` is not a number")]
    InvalidOperand { value: String },
    /// Integer division by zero. Floating division follows IEEE-754.
    #[error("integer division by zero")]
    DivideByZero,
    #[error("operator `{0}` is not supported")]
    UnsupportedOperator(Operator),
}

/// A pop or peek on an empty stack.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackUnderflow {
    /// No binding for a loop variable.
    #[error("variable `{0}` is not bound")]
    Variable(String),
    /// An operator or function needed more values than the echo stack held.
    #[error("`{0}` needs more values than the echo tag provides")]
    Echo(String),
}

/// Any error raised while executing a template.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    StackUnderflow(#[from] StackUnderflow),
    #[error("unknown function `@{0}`")]
    UnknownFunction(String),
    /// A FOR loop without a step was executed.
    #[error("FOR loop over `{variable}` has no step")]
    MissingForStep { variable: String },
    #[error("invalid number format pattern `{pattern}`")]
    InvalidPattern { pattern: String },
    #[error(transparent)]
    Context(#[from] ContextError),
}

pub type EvalResult<T = ()> = Result<T, EvalError>;

#[cfg(test)]
mod tests;
