use super::*;

#[test]
fn leaves_have_no_children() {
    let text = Node::from(TextNode::new("hi"));
    let echo = Node::from(EchoNode::new(vec![Element::ConstantInteger(1)]));
    assert!(text.children().is_empty());
    assert!(echo.children().is_empty());
    assert!(!text.is_container());
    assert!(!echo.is_container());
}

#[test]
fn containers_keep_insertion_order() {
    let mut for_loop = ForLoopNode::new(
        "i",
        Element::ConstantInteger(0),
        Element::ConstantInteger(3),
        Some(Element::ConstantInteger(1)),
    );
    for_loop.add_child(TextNode::new("a").into());
    for_loop.add_child(TextNode::new("b").into());

    let mut document = DocumentNode::new();
    document.add_child(for_loop.into());

    let root = Node::from(document);
    assert!(root.is_container());
    let body = root.children()[0].children();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0], Node::Text(TextNode::new("a")));
    assert_eq!(body[1], Node::Text(TextNode::new("b")));
}

#[test]
fn child_lookup_by_index() {
    let mut document = DocumentNode::new();
    document.add_child(TextNode::new("x").into());
    let root = Node::from(document);
    assert_eq!(root.child_count(), 1);
    assert_eq!(root.child(0), Some(&Node::Text(TextNode::new("x"))));
    assert_eq!(root.child(1), None);
}
