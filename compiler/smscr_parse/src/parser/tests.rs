use pretty_assertions::assert_eq;
use smscr_ir::{write_template, Operator};
use smscr_lexer::LexErrorKind;

use crate::{parse, ParseErrorKind};

use super::*;

fn parse_ok(source: &str) -> DocumentNode {
    match parse(source) {
        Ok(document) => document,
        Err(err) => panic!("parse failed: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(document) => panic!("expected a parse error, got {document:?}"),
        Err(err) => err,
    }
}

#[test]
fn empty_source_is_empty_document() {
    assert_eq!(parse_ok(""), DocumentNode::new());
}

#[test]
fn text_only() {
    let document = parse_ok("hello\nworld");
    assert_eq!(
        document.children,
        vec![Node::Text(TextNode::new("hello\nworld"))]
    );
}

#[test]
fn echo_collects_all_element_kinds() {
    let document = parse_ok(r#"{$= i 1 2.5 "s" @sin * $}"#);
    assert_eq!(
        document.children,
        vec![Node::Echo(EchoNode::new(vec![
            Element::Variable("i".into()),
            Element::ConstantInteger(1),
            Element::ConstantDouble(2.5),
            Element::Str("s".into()),
            Element::Function("sin".into()),
            Element::Operator(Operator::Mul),
        ]))]
    );
}

#[test]
fn empty_echo_is_allowed() {
    assert_eq!(
        parse_ok("{$=$}").children,
        vec![Node::Echo(EchoNode::new(Vec::new()))]
    );
}

#[test]
fn for_loop_with_body() {
    let document = parse_ok("{$FOR i 0 3 1$}x{$=i$}{$END$}tail");
    let mut expected = ForLoopNode::new(
        "i",
        Element::ConstantInteger(0),
        Element::ConstantInteger(3),
        Some(Element::ConstantInteger(1)),
    );
    expected.add_child(TextNode::new("x").into());
    expected.add_child(EchoNode::new(vec![Element::Variable("i".into())]).into());
    assert_eq!(
        document.children,
        vec![expected.into(), TextNode::new("tail").into()]
    );
}

#[test]
fn for_loop_without_step() {
    let document = parse_ok(r#"{$ FOR x "1" y $}{$END$}"#);
    assert_eq!(
        document.children,
        vec![Node::ForLoop(ForLoopNode::new(
            "x",
            Element::Str("1".into()),
            Element::Variable("y".into()),
            None,
        ))]
    );
}

#[test]
fn nested_loops_keep_order() {
    let document = parse_ok("a{$FOR i 0 2 1$}b{$FOR j 0 2 1$}c{$END$}d{$END$}e");
    assert_eq!(document.children.len(), 3);
    let Node::ForLoop(outer) = &document.children[1] else {
        panic!("expected FOR, got {:?}", document.children[1]);
    };
    assert_eq!(outer.variable, "i");
    assert_eq!(outer.children.len(), 3);
    assert_eq!(outer.children[0], TextNode::new("b").into());
    assert_eq!(outer.children[2], TextNode::new("d").into());
    let Node::ForLoop(inner) = &outer.children[1] else {
        panic!("expected nested FOR, got {:?}", outer.children[1]);
    };
    assert_eq!(inner.variable, "j");
    assert_eq!(inner.children, vec![TextNode::new("c").into()]);
}

#[test]
fn canonical_template_round_trips() {
    let source = "Header\r\n{$ FOR i 1 10 1 $}\r\n This is {$= i $}-th time.\r\n{$END$}\r\n\
                  {$ FOR i 0 10 2 $}\r\n sin({$= i $}^2) = {$= i i * @sin \"0.000\" @decfmt $}\r\n{$END$}";
    assert_eq!(write_template(&parse_ok(source)), source);
}

#[test]
fn reparsing_serialized_output_gives_same_tree() {
    let document = parse_ok("{$FOR  i -1 \"x\"$}  {$=\"a\\r\\nb\" @dup $}{$END$}");
    let text = write_template(&document);
    assert_eq!(parse_ok(&text), document);
}

#[test]
fn unclosed_for_is_rejected() {
    let err = parse_err("{$FOR i 0 3 1$}body");
    assert_eq!(err.kind, ParseErrorKind::UnclosedFor { variable: "i".into() });
    assert_eq!(err.span, Span::new(2, 15));
}

#[test]
fn innermost_unclosed_for_is_reported() {
    let err = parse_err("{$FOR i 0 3 1$}{$FOR j 0 3 1$}");
    assert_eq!(err.kind, ParseErrorKind::UnclosedFor { variable: "j".into() });
}

#[test]
fn unmatched_end() {
    let err = parse_err("text{$END$}");
    assert_eq!(err.kind, ParseErrorKind::UnmatchedEnd);
    assert_eq!(err.span, Span::new(6, 9));
}

#[test]
fn for_arity() {
    assert_eq!(
        parse_err("{$FOR i 0$}{$END$}").kind,
        ParseErrorKind::ForArity { found: 1 }
    );
    assert_eq!(
        parse_err("{$FOR i 0 1 2 3$}{$END$}").kind,
        ParseErrorKind::ForArity { found: 4 }
    );
}

#[test]
fn for_requires_variable() {
    assert_eq!(
        parse_err("{$FOR 1 2 3$}{$END$}").kind,
        ParseErrorKind::ForMissingVariable
    );
}

#[test]
fn for_rejects_operators_and_functions() {
    assert_eq!(
        parse_err("{$FOR i 0 + 1$}{$END$}").kind,
        ParseErrorKind::InvalidForElement { found: "an operator" }
    );
    assert_eq!(
        parse_err("{$FOR i 0 @sin $}{$END$}").kind,
        ParseErrorKind::InvalidForElement { found: "a function" }
    );
}

#[test]
fn unknown_tag_is_rejected() {
    let err = parse_err("{$ 1 $}");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken { expected: "FOR, END or `=`", .. }
    ));
}

#[test]
fn end_must_close_tag() {
    let err = parse_err("{$FOR i 0 1 1$}{$END i$}");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn eof_inside_tag() {
    assert_eq!(parse_err("{$= 1").kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(parse_err("{$").kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn lex_errors_surface() {
    assert_eq!(
        parse_err("{$= \"open $}").kind,
        ParseErrorKind::Lex(LexErrorKind::UnterminatedString)
    );
}

#[test]
fn start_tag_inside_echo_is_rejected() {
    let err = parse_err("{$= 1 {$= 2 $}");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken { expected: "an expression or `$}`", .. }
    ));
}
