//! Template syntax tree.
//!
//! The tree is owned top-down: a [`DocumentNode`] owns its children, a
//! [`ForLoopNode`] owns its body, and text/echo nodes are leaves. There are
//! no back-pointers, so a parsed document is plain immutable data that can
//! be shared across threads and interpreted any number of times.

use crate::element::Element;

/// Root of a parsed template.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentNode {
    pub children: Vec<Node>,
}

impl DocumentNode {
    /// Create an empty document.
    pub fn new() -> Self {
        DocumentNode::default()
    }

    /// Append a child, preserving insertion order.
    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// Literal text copied verbatim to the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        TextNode { text: text.into() }
    }
}

/// `{$ FOR var start end [step] $} ... {$END$}`.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoopNode {
    /// Name of the loop variable.
    pub variable: String,
    pub start: Element,
    pub end: Element,
    /// Optional in the syntax; executing a loop without one is an error.
    pub step: Option<Element>,
    pub children: Vec<Node>,
}

impl ForLoopNode {
    pub fn new(
        variable: impl Into<String>,
        start: Element,
        end: Element,
        step: Option<Element>,
    ) -> Self {
        ForLoopNode {
            variable: variable.into(),
            start,
            end,
            step,
            children: Vec::new(),
        }
    }

    /// Append a body node, preserving insertion order.
    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// `{$= elements... $}`: an expression whose result is written out.
#[derive(Clone, Debug, PartialEq)]
pub struct EchoNode {
    pub elements: Vec<Element>,
}

impl EchoNode {
    pub fn new(elements: Vec<Element>) -> Self {
        EchoNode { elements }
    }
}

/// Any node of the template tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document(DocumentNode),
    Text(TextNode),
    ForLoop(ForLoopNode),
    Echo(EchoNode),
}

impl Node {
    /// Child nodes in stored order; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(document) => &document.children,
            Node::ForLoop(for_loop) => &for_loop.children,
            Node::Text(_) | Node::Echo(_) => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Child at `index`, or `None` past the end.
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    /// Whether this kind of node can own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Document(_) | Node::ForLoop(_))
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<ForLoopNode> for Node {
    fn from(node: ForLoopNode) -> Self {
        Node::ForLoop(node)
    }
}

impl From<EchoNode> for Node {
    fn from(node: EchoNode) -> Self {
        Node::Echo(node)
    }
}

impl From<DocumentNode> for Node {
    fn from(node: DocumentNode) -> Self {
        Node::Document(node)
    }
}

#[cfg(test)]
mod tests;
