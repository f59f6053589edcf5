//! Two-mode template lexer.
//!
//! The lexer is always in exactly one of two modes:
//!
//! - **Text**: everything up to the next `{$` (or end of input) becomes one
//!   `TEXT` token. The two-character sequence `\{` is copied through
//!   verbatim, backslash included, and never opens a tag.
//! - **Tag**: whitespace-separated tag tokens until `$}`, which switches
//!   back to text mode.
//!
//! `{$` switches to tag mode from either mode and is consumed as
//! `STARTTAG`.
//!
//! Once the input is exhausted a single `EOF` token is returned; asking for
//! another token after that is an error.

use smscr_ir::{Operator, Span};
use tracing::trace;

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

/// Scanning mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LexerMode {
    Text,
    Tag,
}

/// Whitespace skipped between tag tokens.
#[inline]
fn is_tag_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed inside variable and function names.
#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Streaming lexer over a template source.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    mode: LexerMode,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `source`, in text mode.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            mode: LexerMode::Text,
            finished: false,
        }
    }

    /// Current scanning mode.
    pub fn mode(&self) -> LexerMode {
        self.mode
    }

    /// Produce the next token.
    ///
    /// Returns `EOF` exactly once; every later call fails with
    /// [`LexErrorKind::Exhausted`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.scan()?;
        trace!(kind = %token.kind, span = %token.span, "token");
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        if self.finished {
            return Err(LexError::new(
                LexErrorKind::Exhausted,
                Span::from_range(self.cursor.pos()..self.cursor.pos()),
            ));
        }

        if self.mode == LexerMode::Tag {
            self.cursor.eat_while(is_tag_whitespace);
        }

        if self.cursor.is_eof() {
            self.finished = true;
            return Ok(Token::new(TokenKind::Eof, self.cursor.span_from(self.cursor.pos())));
        }

        if self.cursor.starts_with("{$") {
            let start = self.cursor.pos();
            self.cursor.advance(2);
            self.mode = LexerMode::Tag;
            return Ok(Token::new(TokenKind::StartTag, self.cursor.span_from(start)));
        }

        match self.mode {
            LexerMode::Text => Ok(self.scan_text()),
            LexerMode::Tag => self.scan_tag_token(),
        }
    }

    /// Text up to the next `{$` or end of input.
    fn scan_text(&mut self) -> Token {
        let start = self.cursor.pos();
        let mut text = String::new();
        while !self.cursor.is_eof() && !self.cursor.starts_with("{$") {
            if self.cursor.starts_with("\\{") {
                text.push_str("\\{");
                self.cursor.advance(2);
                continue;
            }
            if let Some(c) = self.cursor.bump() {
                text.push(c);
            }
        }
        Token::new(TokenKind::Text(text), self.cursor.span_from(start))
    }

    fn scan_tag_token(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();

        if self.cursor.starts_with("$}") {
            self.cursor.advance(2);
            self.mode = LexerMode::Text;
            return Ok(Token::new(TokenKind::EndTag, self.cursor.span_from(start)));
        }
        if self.cursor.starts_with("FOR") {
            self.cursor.advance(3);
            return Ok(Token::new(TokenKind::For, self.cursor.span_from(start)));
        }
        if self.cursor.starts_with("END") {
            self.cursor.advance(3);
            return Ok(Token::new(TokenKind::End, self.cursor.span_from(start)));
        }

        let Some(c) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::Eof, self.cursor.span_from(start)));
        };

        match c {
            '=' => {
                self.cursor.bump();
                Ok(Token::new(TokenKind::TagName, self.cursor.span_from(start)))
            }
            '-' if self.cursor.peek_next().is_some_and(|next| next.is_ascii_digit()) => {
                self.scan_number()
            }
            '@' => self.scan_function(),
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() => self.scan_variable(),
            c => match Operator::from_char(c) {
                Some(op) => {
                    self.cursor.bump();
                    Ok(Token::new(TokenKind::Operator(op), self.cursor.span_from(start)))
                }
                None => {
                    self.cursor.bump();
                    Err(LexError::new(
                        LexErrorKind::UnrecognizedCharacter(c),
                        self.cursor.span_from(start),
                    ))
                }
            },
        }
    }

    /// Integer or double literal, optionally with a leading `-`.
    ///
    /// The literal runs until whitespace, `$`, or end of input, whether or
    /// not it is signed; it is an integer if it parses as one, otherwise a
    /// double, otherwise an error.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        if self.cursor.current() == Some('-') {
            self.cursor.bump();
        }
        self.cursor.eat_while(|c| !is_tag_whitespace(c) && c != '$');

        let literal = self.cursor.slice_from(start);
        let span = self.cursor.span_from(start);
        if let Ok(value) = literal.parse::<i64>() {
            return Ok(Token::new(TokenKind::Integer(value), span));
        }
        if let Ok(value) = literal.parse::<f64>() {
            return Ok(Token::new(TokenKind::Double(value), span));
        }
        Err(LexError::new(
            LexErrorKind::MalformedNumber(literal.to_owned()),
            span,
        ))
    }

    /// `@name`: letters, digits, and underscores up to whitespace.
    fn scan_function(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let name_start = self.cursor.pos();

        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedFunction,
                        self.cursor.span_from(start),
                    ));
                }
                Some(c) if is_tag_whitespace(c) => break,
                Some(c) if is_name_char(c) => {
                    self.cursor.bump();
                }
                Some(c) => {
                    let at = self.cursor.pos();
                    self.cursor.bump();
                    return Err(LexError::new(
                        LexErrorKind::InvalidFunctionChar(c),
                        self.cursor.span_from(at),
                    ));
                }
            }
        }

        let name = self.cursor.slice_from(name_start);
        if name.is_empty() {
            return Err(LexError::new(
                LexErrorKind::EmptyFunctionName,
                self.cursor.span_from(start),
            ));
        }
        Ok(Token::new(
            TokenKind::Function(name.to_owned()),
            self.cursor.span_from(start),
        ))
    }

    /// `"..."`: raw characters up to the closing quote.
    ///
    /// No escapes are recognized except the literal four-character text
    /// `\r\n`, which becomes an actual CRLF.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let body_start = self.cursor.pos();
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_eof() {
            return Err(LexError::new(
                LexErrorKind::UnterminatedString,
                self.cursor.span_from(start),
            ));
        }

        let body = self.cursor.slice_from(body_start).replace("\\r\\n", "\r\n");
        self.cursor.bump();
        Ok(Token::new(TokenKind::Str(body), self.cursor.span_from(start)))
    }

    /// Variable name: letters, digits, and underscores up to whitespace or
    /// `$`.
    fn scan_variable(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        while let Some(c) = self.cursor.current() {
            if is_tag_whitespace(c) || c == '$' {
                break;
            }
            if !is_name_char(c) {
                let at = self.cursor.pos();
                self.cursor.bump();
                return Err(LexError::new(
                    LexErrorKind::InvalidVariableChar(c),
                    self.cursor.span_from(at),
                ));
            }
            self.cursor.bump();
        }
        Ok(Token::new(
            TokenKind::Variable(self.cursor.slice_from(start).to_owned()),
            self.cursor.span_from(start),
        ))
    }
}

/// Lex an entire template, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
