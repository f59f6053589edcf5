//! Command-line parsing.
//!
//! Arguments are parsed by hand; the command set is small and fixed.

use rustc_hash::FxHashMap;

use crate::error::CliError;

/// Options of the `render` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Request parameters (`-p name=value`).
    pub parameters: FxHashMap<String, String>,
    /// Initial persistent parameters (`-P name=value`).
    pub persistent: FxHashMap<String, String>,
    /// Initial temporary parameters (`-t name=value`).
    pub temporary: FxHashMap<String, String>,
    /// Emit a response header before the output (`--headers`).
    pub headers: bool,
    pub mime_type: Option<String>,
    pub encoding: Option<String>,
}

/// A parsed driver invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Render { path: String, options: RenderOptions },
    Tree { path: String },
    Lex { path: String },
    Help,
}

/// Parse `args` (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };
    match command.as_str() {
        "render" => {
            let (path, options) = parse_render_options(rest)?;
            Ok(Command::Render { path, options })
        }
        "tree" => Ok(Command::Tree {
            path: single_path("tree", rest)?,
        }),
        "lex" => Ok(Command::Lex {
            path: single_path("lex", rest)?,
        }),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn single_path(command: &str, args: &[String]) -> Result<String, CliError> {
    match args {
        [path] => Ok(path.clone()),
        [] => Err(CliError::Usage(format!("usage: smscr {command} <file.smscr>"))),
        _ => Err(CliError::Usage(format!(
            "`{command}` takes exactly one file argument"
        ))),
    }
}

/// Parse `render` arguments: one template path plus options in any order.
pub fn parse_render_options(args: &[String]) -> Result<(String, RenderOptions), CliError> {
    let mut options = RenderOptions::default();
    let mut path = None;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" | "-P" | "-t" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("`{arg}` expects name=value")))?;
                let (name, value) = parse_assignment(value)?;
                let target = match arg.as_str() {
                    "-p" => &mut options.parameters,
                    "-P" => &mut options.persistent,
                    _ => &mut options.temporary,
                };
                target.insert(name, value);
            }
            "--headers" => options.headers = true,
            "--mime" | "--encoding" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("`{arg}` expects a value")))?;
                if arg == "--mime" {
                    options.mime_type = Some(value.clone());
                } else {
                    options.encoding = Some(value.clone());
                }
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option `{flag}`")));
            }
            file => {
                if path.replace(file.to_owned()).is_some() {
                    return Err(CliError::Usage(
                        "`render` takes exactly one template".to_owned(),
                    ));
                }
            }
        }
    }

    let path = path.ok_or_else(|| {
        CliError::Usage("usage: smscr render <file.smscr> [options]".to_owned())
    })?;
    Ok((path, options))
}

/// Split `name=value`; the value may itself contain `=`.
pub fn parse_assignment(text: &str) -> Result<(String, String), CliError> {
    match text.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(CliError::Usage(format!(
            "expected name=value, found `{text}`"
        ))),
    }
}

#[cfg(test)]
mod tests;
