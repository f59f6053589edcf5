//! Token types produced by the lexer.

use std::fmt;

use smscr_ir::{format_double, Operator, Span};

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Tag-structure tokens carry no payload; literal tokens carry their parsed
/// value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `{$`
    StartTag,
    /// `$}`
    EndTag,
    /// `FOR`
    For,
    /// `END`
    End,
    /// `=`, the echo tag name.
    TagName,
    /// Literal text between tags.
    Text(String),
    /// Variable name.
    Variable(String),
    /// Integer literal, possibly negative.
    Integer(i64),
    /// Floating literal, possibly negative.
    Double(f64),
    /// String literal, quotes stripped, `\r\n` expanded.
    Str(String),
    /// `+ - * / ^`
    Operator(Operator),
    /// Function name without the leading `@`.
    Function(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Upper-case kind name, as shown in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::StartTag => "STARTTAG",
            TokenKind::EndTag => "ENDTAG",
            TokenKind::For => "FOR",
            TokenKind::End => "END",
            TokenKind::TagName => "TAGNAME",
            TokenKind::Text(_) => "TEXT",
            TokenKind::Variable(_) => "VARIABLE",
            TokenKind::Integer(_) => "INTEGER",
            TokenKind::Double(_) => "DOUBLE",
            TokenKind::Str(_) => "STRING",
            TokenKind::Operator(_) => "OPERATOR",
            TokenKind::Function(_) => "FUNCTION",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            TokenKind::StartTag => write!(f, "{name}({{$)"),
            TokenKind::EndTag => write!(f, "{name}($}})"),
            TokenKind::For | TokenKind::End | TokenKind::Eof => f.write_str(name),
            TokenKind::TagName => write!(f, "{name}(=)"),
            TokenKind::Text(text) => write!(f, "{name}({text:?})"),
            TokenKind::Variable(value) => write!(f, "{name}({value})"),
            TokenKind::Function(value) => write!(f, "{name}(@{value})"),
            TokenKind::Integer(value) => write!(f, "{name}({value})"),
            TokenKind::Double(value) => write!(f, "{name}({})", format_double(*value)),
            TokenKind::Str(value) => write!(f, "{name}({value:?})"),
            TokenKind::Operator(op) => write!(f, "{name}({op})"),
        }
    }
}

#[cfg(test)]
mod tests;
