//! Expression elements: the leaves of FOR headers and echo tags.
//!
//! Elements are immutable once the parser builds them. Each one renders to
//! the canonical source text it was parsed from (see [`Element::as_text`]),
//! which is what the template serializer emits.

use std::fmt;

use crate::number::format_double;

/// Binary operator symbols accepted inside tags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Map a tag character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// The operator's source symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed leaf value used in FOR headers and echo tags.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Integer literal: `42`, `-3`.
    ConstantInteger(i64),
    /// Floating literal: `2.5`, `1.2E1`.
    ConstantDouble(f64),
    /// String literal with quotes stripped and `\r\n` already expanded.
    Str(String),
    /// Variable reference: `i`, `row_count`.
    Variable(String),
    /// Built-in function reference, stored without the leading `@`.
    Function(String),
    /// Operator symbol.
    Operator(Operator),
}

impl Element {
    /// Canonical source text of this element.
    ///
    /// Constants render as their literal, variables and functions as their
    /// name (`@`-prefixed for functions), operators as their symbol. String
    /// literals are re-quoted and CRLF pairs re-escaped so the text lexes
    /// back to the same element.
    pub fn as_text(&self) -> String {
        match self {
            Element::ConstantInteger(value) => value.to_string(),
            Element::ConstantDouble(value) => format_double(*value),
            Element::Str(value) => format!("\"{}\"", value.replace("\r\n", "\\r\\n")),
            Element::Variable(name) => name.clone(),
            Element::Function(name) => format!("@{name}"),
            Element::Operator(op) => op.symbol().to_owned(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}
