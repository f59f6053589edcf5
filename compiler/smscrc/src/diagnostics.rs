//! Source-annotated error reports.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use smscr_ir::Span;

use crate::error::CliError;

/// Render `err` for the terminal.
///
/// Errors that point into the template get an annotated source snippet;
/// everything else is a single `error:` line.
pub fn report(err: &CliError, path: &str, source: &str) -> String {
    match err.span() {
        Some(span) => render_snippet(path, source, &err.headline(), span),
        None => format!("error: {err}\n"),
    }
}

/// Annotated snippet pointing at `span` in `source`.
pub fn render_snippet(path: &str, source: &str, message: &str, span: Span) -> String {
    let range = char_range(source, span);
    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, path, range.start)
        .with_config(Config::default().with_color(false))
        .with_message(message)
        .with_label(Label::new((path, range)).with_message(message))
        .finish()
        .write((path, Source::from(source)), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {message} at {span}\n"),
    }
}

/// Byte span to a char range, widened to one char when empty.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let to_char = |offset: usize| {
        let offset = offset.min(source.len());
        source
            .char_indices()
            .take_while(|(index, _)| *index < offset)
            .count()
    };
    let total = source.chars().count();
    let start = to_char(span.start as usize);
    let end = to_char(span.end as usize).max(start);
    if start == end && end < total {
        start..end + 1
    } else {
        start..end
    }
}
