//! Driver errors.

use std::io;

use smscr_eval::EvalError;
use smscr_ir::Span;
use smscr_lexer::LexError;
use smscr_parse::ParseError;
use thiserror::Error;

/// Anything that can make a driver command fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }

    /// Source location, for errors that point into the template.
    pub fn span(&self) -> Option<Span> {
        match self {
            CliError::Lex(err) => Some(err.span),
            CliError::Parse(err) => Some(err.span),
            _ => None,
        }
    }

    /// Message without the trailing location.
    pub fn headline(&self) -> String {
        match self {
            CliError::Lex(err) => err.kind.to_string(),
            CliError::Parse(err) => err.kind.to_string(),
            other => other.to_string(),
        }
    }
}
