//! Driver commands.
//!
//! Each command works on template source text and returns what it would
//! print, so the same code serves the binary and the tests.

use std::fmt::Write as _;
use std::io::Write;

use rustc_hash::FxHashMap;
use smscr_eval::{execute, EvalError, ExecutionContext, PersistentParameters, RequestContext};
use smscr_ir::write_template;
use smscr_lexer::tokenize;
use tracing::debug;

use crate::error::CliError;
use crate::options::RenderOptions;

/// Render `source` into `out`.
///
/// Returns the persistent-parameter changes made by the template, one
/// line each, sorted by name.
pub fn render_source<W: Write>(
    source: &str,
    options: &RenderOptions,
    out: W,
) -> Result<Vec<String>, CliError> {
    let document = smscr_parse::parse(source)?;
    let mut context = RequestContext::new(out)
        .with_parameters(options.parameters.clone())
        .with_persistent(PersistentParameters::from(options.persistent.clone()))
        .with_temporary(options.temporary.clone())
        .with_header(options.headers);

    if let Some(mime_type) = &options.mime_type {
        context.set_mime_type(mime_type).map_err(EvalError::from)?;
    }
    if let Some(encoding) = &options.encoding {
        context.set_encoding(encoding).map_err(EvalError::from)?;
    }

    let result = execute(&document, &mut context);
    let after = context.persistent().snapshot();
    let mut out = context.into_output();
    out.flush()?;
    result?;

    let changes = persistent_changes(&options.persistent, &after);
    debug!(changes = changes.len(), "render finished");
    Ok(changes)
}

/// Describe how `after` differs from `before`.
pub fn persistent_changes(
    before: &FxHashMap<String, String>,
    after: &FxHashMap<String, String>,
) -> Vec<String> {
    let mut changes: Vec<(&str, String)> = Vec::new();
    for (name, value) in after {
        if before.get(name) != Some(value) {
            changes.push((name, format!("persistent {name}={value}")));
        }
    }
    for name in before.keys() {
        if !after.contains_key(name) {
            changes.push((name, format!("persistent {name} removed")));
        }
    }
    changes.sort_by(|a, b| a.0.cmp(b.0));
    changes.into_iter().map(|(_, line)| line).collect()
}

/// Parse `source` and print it back in canonical form.
pub fn tree_source(source: &str) -> Result<String, CliError> {
    let document = smscr_parse::parse(source)?;
    Ok(write_template(&document))
}

/// Token dump, one token per line.
pub fn lex_source(path: &str, source: &str) -> Result<String, CliError> {
    let tokens = tokenize(source)?;
    let mut dump = String::new();
    let _ = writeln!(dump, "Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        let _ = writeln!(dump, "  {} @ {}", token.kind, token.span);
    }
    Ok(dump)
}
