//! Token-stream parser.
//!
//! The whole token stream is collected first, then scanned once left to
//! right. Open FOR loops live on an explicit container stack; the document
//! is the implicit bottom. A loop is attached to its parent when its END is
//! seen, which keeps children in source order without back-pointers.

use smscr_ir::{DocumentNode, EchoNode, Element, ForLoopNode, Node, Span, TextNode};
use smscr_lexer::{Token, TokenKind};
use tracing::debug;

use crate::error::{ParseError, ParseErrorKind};

/// An open FOR and the span of its header, for error reporting.
struct OpenLoop {
    node: ForLoopNode,
    span: Span,
}

/// Single-pass parser over a complete token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    document: DocumentNode,
    open: Vec<OpenLoop>,
}

impl Parser {
    /// Create a parser over `tokens`, which must end with `EOF`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            document: DocumentNode::new(),
            open: Vec::new(),
        }
    }

    /// Parse the token stream into a document.
    pub fn parse_document(mut self) -> Result<DocumentNode, ParseError> {
        loop {
            let token = self.bump()?;
            match token.kind {
                TokenKind::Text(text) => self.attach(TextNode::new(text).into()),
                TokenKind::StartTag => self.parse_tag()?,
                TokenKind::Eof => break,
                other => {
                    return Err(unexpected("text or `{$`", &other, token.span));
                }
            }
        }

        if let Some(unclosed) = self.open.pop() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedFor {
                    variable: unclosed.node.variable,
                },
                unclosed.span,
            ));
        }
        Ok(self.document)
    }

    /// Append a node to the innermost open container.
    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(open) => open.node.add_child(node),
            None => self.document.add_child(node),
        }
    }

    /// Consume and return the next token.
    fn bump(&mut self) -> Result<Token, ParseError> {
        let Some(token) = self.tokens.get(self.pos) else {
            let end = self.tokens.last().map_or(Span::DUMMY, |t| t.span);
            return Err(ParseError::new(ParseErrorKind::UnexpectedEof, end));
        };
        self.pos += 1;
        Ok(token.clone())
    }

    /// Everything after `{$`.
    fn parse_tag(&mut self) -> Result<(), ParseError> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::For => self.parse_for(token.span),
            TokenKind::TagName => self.parse_echo(),
            TokenKind::End => self.parse_end(token.span),
            TokenKind::Eof => Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span)),
            other => Err(unexpected("FOR, END or `=`", &other, token.span)),
        }
    }

    fn parse_for(&mut self, header_start: Span) -> Result<(), ParseError> {
        let token = self.bump()?;
        let variable = match token.kind {
            TokenKind::Variable(name) => name,
            TokenKind::Eof => {
                return Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span));
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::ForMissingVariable,
                    token.span,
                ));
            }
        };

        let mut bounds = Vec::with_capacity(3);
        let end_span = loop {
            let token = self.bump()?;
            match token.kind {
                TokenKind::EndTag => break token.span,
                TokenKind::Eof => {
                    return Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span));
                }
                kind => match for_element(kind) {
                    Ok(element) => bounds.push(element),
                    Err(kind) => return Err(ParseError::new(kind, token.span)),
                },
            }
        };

        let header = header_start.merge(end_span);
        let found = bounds.len();
        let mut bounds = bounds.into_iter();
        let (Some(start), Some(end), step, None) =
            (bounds.next(), bounds.next(), bounds.next(), bounds.next())
        else {
            return Err(ParseError::new(ParseErrorKind::ForArity { found }, header));
        };

        debug!(variable = %variable, depth = self.open.len() + 1, "open FOR");
        self.open.push(OpenLoop {
            node: ForLoopNode::new(variable, start, end, step),
            span: header,
        });
        Ok(())
    }

    fn parse_echo(&mut self) -> Result<(), ParseError> {
        let mut elements = Vec::new();
        loop {
            let token = self.bump()?;
            match token.kind {
                TokenKind::EndTag => break,
                TokenKind::Eof => {
                    return Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span));
                }
                kind => match echo_element(kind) {
                    Ok(element) => elements.push(element),
                    Err(other) => {
                        return Err(unexpected("an expression or `$}`", &other, token.span));
                    }
                },
            }
        }
        self.attach(EchoNode::new(elements).into());
        Ok(())
    }

    fn parse_end(&mut self, span: Span) -> Result<(), ParseError> {
        let token = self.bump()?;
        match token.kind {
            TokenKind::EndTag => {}
            TokenKind::Eof => {
                return Err(ParseError::new(ParseErrorKind::UnexpectedEof, token.span));
            }
            other => return Err(unexpected("`$}` after END", &other, token.span)),
        }

        let Some(closed) = self.open.pop() else {
            return Err(ParseError::new(ParseErrorKind::UnmatchedEnd, span));
        };
        debug!(variable = %closed.node.variable, depth = self.open.len(), "close FOR");
        self.attach(closed.node.into());
        Ok(())
    }
}

fn unexpected(expected: &'static str, found: &TokenKind, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken {
            expected,
            found: found.to_string(),
        },
        span,
    )
}

/// FOR headers accept variables and constants only.
fn for_element(kind: TokenKind) -> Result<Element, ParseErrorKind> {
    match kind {
        TokenKind::Variable(name) => Ok(Element::Variable(name)),
        TokenKind::Integer(value) => Ok(Element::ConstantInteger(value)),
        TokenKind::Double(value) => Ok(Element::ConstantDouble(value)),
        TokenKind::Str(value) => Ok(Element::Str(value)),
        TokenKind::Operator(_) => Err(ParseErrorKind::InvalidForElement { found: "an operator" }),
        TokenKind::Function(_) => Err(ParseErrorKind::InvalidForElement { found: "a function" }),
        other => Err(ParseErrorKind::UnexpectedToken {
            expected: "a FOR expression or `$}`",
            found: other.to_string(),
        }),
    }
}

/// Echo tags accept every expression kind; anything else is handed back.
fn echo_element(kind: TokenKind) -> Result<Element, TokenKind> {
    match kind {
        TokenKind::Variable(name) => Ok(Element::Variable(name)),
        TokenKind::Integer(value) => Ok(Element::ConstantInteger(value)),
        TokenKind::Double(value) => Ok(Element::ConstantDouble(value)),
        TokenKind::Str(value) => Ok(Element::Str(value)),
        TokenKind::Function(name) => Ok(Element::Function(name)),
        TokenKind::Operator(op) => Ok(Element::Operator(op)),
        other => Err(other),
    }
}

#[cfg(test)]
mod tests;
