//! Template serializer.
//!
//! Writes a tree back out in tag syntax with canonical single-space
//! separators:
//!
//! - text: verbatim
//! - echo: `{$=` + ` element` for each element + ` $}`
//! - FOR: `{$ FOR var start end [step] $}`, the body, then `{$END$}`
//! - document: its children back to back
//!
//! For any template already written in this canonical form,
//! `write_template(&parse(text)?) == text`.

use std::fmt::{self, Write};

use crate::ast::{DocumentNode, EchoNode, ForLoopNode, Node, TextNode};
use crate::visitor::{walk_for_loop, Visitor};

/// Visitor that writes template syntax into any `fmt::Write` sink.
pub struct TemplateWriter<'w, W: Write> {
    out: &'w mut W,
}

impl<'w, W: Write> TemplateWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        TemplateWriter { out }
    }
}

impl<'ast, W: Write> Visitor<'ast> for TemplateWriter<'_, W> {
    type Error = fmt::Error;

    fn visit_text(&mut self, node: &'ast TextNode) -> fmt::Result {
        self.out.write_str(&node.text)
    }

    fn visit_for_loop(&mut self, node: &'ast ForLoopNode) -> fmt::Result {
        write!(
            self.out,
            "{{$ FOR {} {} {}",
            node.variable, node.start, node.end
        )?;
        if let Some(step) = &node.step {
            write!(self.out, " {step}")?;
        }
        self.out.write_str(" $}")?;
        walk_for_loop(self, node)?;
        self.out.write_str("{$END$}")
    }

    fn visit_echo(&mut self, node: &'ast EchoNode) -> fmt::Result {
        self.out.write_str("{$=")?;
        for element in &node.elements {
            write!(self.out, " {element}")?;
        }
        self.out.write_str(" $}")
    }
}

/// Serialize a whole document to a new string.
pub fn write_template(document: &DocumentNode) -> String {
    document.to_string()
}

impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TemplateWriter::new(f).visit_document(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TemplateWriter::new(f).visit_node(self)
    }
}
