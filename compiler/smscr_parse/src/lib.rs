//! Parser for the smscr template language.
//!
//! [`parse`] lexes the whole source, then builds a [`DocumentNode`] in one
//! pass. The first lexical or structural error aborts the parse.

mod error;
mod parser;

use smscr_ir::DocumentNode;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;

/// Lex and parse `source` into a template tree.
pub fn parse(source: &str) -> Result<DocumentNode, ParseError> {
    let tokens = smscr_lexer::tokenize(source)?;
    Parser::new(tokens).parse_document()
}
