//! Parse error types.
//!
//! Parsing stops at the first error. Lexer failures are folded in, so
//! callers of [`parse`](crate::parse) deal with a single error type.

use smscr_ir::Span;
use smscr_lexer::{LexError, LexErrorKind};
use thiserror::Error;

/// A parse error with the span of the token that caused it.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The lexer rejected the input.
    #[error("{0}")]
    Lex(LexErrorKind),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    /// `{$END$}` with no open FOR.
    #[error("END tag without a matching FOR")]
    UnmatchedEnd,
    /// FOR header with other than 2 or 3 expressions after the variable.
    #[error("FOR takes a start, an end and an optional step, found {found} expressions")]
    ForArity { found: usize },
    #[error("FOR must be followed by a loop variable")]
    ForMissingVariable,
    /// Operator or function inside a FOR header.
    #[error("{found} is not allowed in a FOR header")]
    InvalidForElement { found: &'static str },
    /// Input ended while a FOR was still open.
    #[error("FOR loop over `{variable}` is never closed with END")]
    UnclosedFor { variable: String },
    #[error("unexpected end of input inside a tag")]
    UnexpectedEof,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}
