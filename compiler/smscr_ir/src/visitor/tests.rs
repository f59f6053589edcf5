use std::convert::Infallible;

use super::*;
use crate::element::Element;

/// Records node kinds in visitation order.
#[derive(Default)]
struct KindLog {
    kinds: Vec<&'static str>,
}

impl<'ast> Visitor<'ast> for KindLog {
    type Error = Infallible;

    fn visit_document(&mut self, node: &'ast DocumentNode) -> Result<(), Infallible> {
        self.kinds.push("document");
        walk_document(self, node)
    }

    fn visit_text(&mut self, _node: &'ast TextNode) -> Result<(), Infallible> {
        self.kinds.push("text");
        Ok(())
    }

    fn visit_for_loop(&mut self, node: &'ast ForLoopNode) -> Result<(), Infallible> {
        self.kinds.push("for");
        walk_for_loop(self, node)
    }

    fn visit_echo(&mut self, _node: &'ast EchoNode) -> Result<(), Infallible> {
        self.kinds.push("echo");
        Ok(())
    }
}

fn sample() -> DocumentNode {
    let mut inner = ForLoopNode::new(
        "j",
        Element::ConstantInteger(0),
        Element::ConstantInteger(1),
        None,
    );
    inner.add_child(EchoNode::new(vec![Element::Variable("j".into())]).into());

    let mut outer = ForLoopNode::new(
        "i",
        Element::ConstantInteger(0),
        Element::ConstantInteger(2),
        None,
    );
    outer.add_child(TextNode::new("x").into());
    outer.add_child(inner.into());

    let mut document = DocumentNode::new();
    document.add_child(TextNode::new("head").into());
    document.add_child(outer.into());
    document.add_child(TextNode::new("tail").into());
    document
}

#[test]
fn depth_first_pre_order() {
    let mut log = KindLog::default();
    let _ = log.visit_document(&sample());
    assert_eq!(
        log.kinds,
        vec!["document", "text", "for", "text", "for", "echo", "text"]
    );
}

/// Stops at the first echo it sees.
struct FailOnEcho {
    texts_seen: usize,
}

impl<'ast> Visitor<'ast> for FailOnEcho {
    type Error = &'static str;

    fn visit_text(&mut self, _node: &'ast TextNode) -> Result<(), &'static str> {
        self.texts_seen += 1;
        Ok(())
    }

    fn visit_echo(&mut self, _node: &'ast EchoNode) -> Result<(), &'static str> {
        Err("echo")
    }
}

#[test]
fn first_error_aborts_walk() {
    let mut visitor = FailOnEcho { texts_seen: 0 };
    assert_eq!(visitor.visit_document(&sample()), Err("echo"));
    // "head" and the loop's "x" were seen; "tail" never was.
    assert_eq!(visitor.texts_seen, 2);
}
