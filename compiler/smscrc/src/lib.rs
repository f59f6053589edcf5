//! Driver for the smscr template language.
//!
//! Commands:
//! - `render`: parse and execute a template, writing the output to stdout
//! - `tree`: parse a template and print it back in canonical form
//! - `lex`: dump the token stream
//!
//! Errors that point into the template are reported with an annotated
//! source snippet.

pub mod commands;
pub mod diagnostics;
mod error;
pub mod options;
mod tracing_setup;

use std::fs;
use std::io;

pub use error::CliError;
pub use options::{parse_args, Command, RenderOptions};
pub use tracing_setup::init_tracing;

/// Run a parsed command and return the process exit code.
pub fn run(command: Command) -> i32 {
    match command {
        Command::Help => {
            print_usage();
            0
        }
        Command::Lex { path } => with_source(&path, |source| {
            print!("{}", commands::lex_source(&path, source)?);
            Ok(())
        }),
        Command::Tree { path } => with_source(&path, |source| {
            print!("{}", commands::tree_source(source)?);
            Ok(())
        }),
        Command::Render { path, options } => with_source(&path, |source| {
            let changes = commands::render_source(source, &options, io::stdout().lock())?;
            for change in changes {
                eprintln!("{change}");
            }
            Ok(())
        }),
    }
}

/// Read `path` and run `command` on its contents, reporting any failure.
fn with_source(path: &str, command: impl FnOnce(&str) -> Result<(), CliError>) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            let err = CliError::Read {
                path: path.to_owned(),
                source,
            };
            eprintln!("error: {err}");
            return err.exit_code();
        }
    };

    match command(&source) {
        Ok(()) => 0,
        Err(err) => {
            eprint!("{}", diagnostics::report(&err, path, &source));
            err.exit_code()
        }
    }
}

pub fn print_usage() {
    println!("smscr - SmartScript template engine");
    println!();
    println!("Usage: smscr <command> [options]");
    println!();
    println!("Commands:");
    println!("  render <file>    Execute a template and print its output");
    println!("  tree <file>      Print the parsed template in canonical form");
    println!("  lex <file>       Print the token stream");
    println!("  help             Show this message");
    println!();
    println!("Render options:");
    println!("  -p name=value    Request parameter (repeatable)");
    println!("  -P name=value    Initial persistent parameter (repeatable)");
    println!("  -t name=value    Initial temporary parameter (repeatable)");
    println!("  --headers        Emit a response header before the output");
    println!("  --mime <type>    Initial MIME type (default: text/html)");
    println!("  --encoding <e>   Output encoding (only UTF-8 is supported)");
    println!();
    println!("Set RUST_LOG to enable logging, SMSCR_LOG_TREE for tree output.");
}
