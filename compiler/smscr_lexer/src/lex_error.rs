//! Lexer error types.
//!
//! Every error carries the span of the character or literal that could not
//! be scanned, so the driver can underline it.

use smscr_ir::Span;
use thiserror::Error;

/// A lexer error: WHAT went wrong and WHERE.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any tag token.
    #[error("unrecognized character `{0}` inside tag")]
    UnrecognizedCharacter(char),
    /// Digits (optionally signed) that parse as neither integer nor double.
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input ended in the middle of an `@function` name.
    #[error("unterminated function name")]
    UnterminatedFunction,
    /// `@` followed directly by whitespace.
    #[error("missing function name after `@`")]
    EmptyFunctionName,
    /// A variable name run interrupted by a character other than a letter,
    /// digit, or underscore.
    #[error("invalid character `{0}` in variable name")]
    InvalidVariableChar(char),
    /// A function name run interrupted by a character other than a letter,
    /// digit, underscore, or whitespace.
    #[error("invalid character `{0}` in function name")]
    InvalidFunctionChar(char),
    /// `next_token` called again after EOF was returned.
    #[error("no more tokens: input is exhausted")]
    Exhausted,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

#[cfg(test)]
mod tests;
