//! Template tree visitor.
//!
//! One trait with one method per node kind. Default implementations call
//! the matching `walk_*` function, which visits children depth-first in
//! stored order. Override `visit_*` to act on a kind; call `walk_*` from the
//! override to keep descending.
//!
//! Visitors are fallible: the serializer fails with `fmt::Error`, the
//! interpreter with its evaluation error, and purely observational visitors
//! use [`std::convert::Infallible`].
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//! use smscr_ir::{walk_for_loop, DocumentNode, ForLoopNode, Visitor};
//!
//! #[derive(Default)]
//! struct LoopDepth {
//!     current: usize,
//!     max: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for LoopDepth {
//!     type Error = Infallible;
//!
//!     fn visit_for_loop(&mut self, node: &'ast ForLoopNode) -> Result<(), Infallible> {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!         walk_for_loop(self, node)?;
//!         self.current -= 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut depth = LoopDepth::default();
//! let _ = depth.visit_document(&DocumentNode::new());
//! assert_eq!(depth.max, 0);
//! ```

use smscr_stack::ensure_sufficient_stack;

use crate::ast::{DocumentNode, EchoNode, ForLoopNode, Node, TextNode};

/// Template tree visitor.
pub trait Visitor<'ast> {
    /// Error that aborts the walk.
    type Error;

    /// Visit the root (or a nested document node).
    fn visit_document(&mut self, node: &'ast DocumentNode) -> Result<(), Self::Error> {
        walk_document(self, node)
    }

    /// Visit a literal text node.
    fn visit_text(&mut self, node: &'ast TextNode) -> Result<(), Self::Error> {
        let _ = node;
        Ok(())
    }

    /// Visit a FOR loop.
    fn visit_for_loop(&mut self, node: &'ast ForLoopNode) -> Result<(), Self::Error> {
        walk_for_loop(self, node)
    }

    /// Visit an echo tag.
    fn visit_echo(&mut self, node: &'ast EchoNode) -> Result<(), Self::Error> {
        let _ = node;
        Ok(())
    }

    /// Dispatch on the node kind.
    fn visit_node(&mut self, node: &'ast Node) -> Result<(), Self::Error> {
        walk_node(self, node)
    }
}

/// Dispatch `node` to the visitor method for its kind.
///
/// Every nested FOR passes through here, so this is where deep templates
/// get their stack headroom.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    node: &'ast Node,
) -> Result<(), V::Error> {
    ensure_sufficient_stack(|| match node {
        Node::Document(document) => visitor.visit_document(document),
        Node::Text(text) => visitor.visit_text(text),
        Node::ForLoop(for_loop) => visitor.visit_for_loop(for_loop),
        Node::Echo(echo) => visitor.visit_echo(echo),
    })
}

/// Visit every child of a document in order.
pub fn walk_document<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    node: &'ast DocumentNode,
) -> Result<(), V::Error> {
    walk_children(visitor, &node.children)
}

/// Visit every body node of a FOR loop in order.
pub fn walk_for_loop<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    node: &'ast ForLoopNode,
) -> Result<(), V::Error> {
    walk_children(visitor, &node.children)
}

/// Visit a slice of sibling nodes in order, stopping at the first error.
pub fn walk_children<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    children: &'ast [Node],
) -> Result<(), V::Error> {
    for child in children {
        visitor.visit_node(child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
