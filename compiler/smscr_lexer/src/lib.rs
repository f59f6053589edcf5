//! Lexer for the smscr template language.
//!
//! Turns template source into a flat token stream. Text between tags is a
//! single `TEXT` token; inside `{$ ... $}` the lexer produces keywords,
//! literals, variables, functions, and operators.

mod cursor;
mod lex_error;
mod lexer;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer, LexerMode};
pub use token::{Token, TokenKind};
