//! smscr IR - core data types for the smscr template language.
//!
//! This crate contains the data shared by every pipeline stage:
//! - [`Span`] for source locations
//! - [`Element`] / [`Operator`] for the leaves of tags
//! - the template tree ([`DocumentNode`], [`Node`], ...)
//! - the [`Visitor`] trait and `walk_*` helpers
//! - the template serializer ([`write_template`], `Display` for nodes)
//!
//! # Design
//!
//! - **Closed sum types**: elements and nodes are enums dispatched by
//!   pattern matching; the visitor is a convenience over that, not the
//!   only way in.
//! - **Owned tree**: containers own a `Vec<Node>`; no arena, no parent
//!   links. A parsed document is immutable and `Send + Sync`.

mod ast;
mod element;
mod number;
mod span;
pub mod visitor;
mod writer;

pub use ast::{DocumentNode, EchoNode, ForLoopNode, Node, TextNode};
pub use element::{Element, Operator};
pub use number::format_double;
pub use span::Span;
pub use visitor::{walk_children, walk_document, walk_for_loop, walk_node, Visitor};
pub use writer::{write_template, TemplateWriter};
