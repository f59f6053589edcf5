use super::*;

#[test]
fn display_shows_kind_and_payload() {
    assert_eq!(TokenKind::StartTag.to_string(), "STARTTAG({$)");
    assert_eq!(TokenKind::EndTag.to_string(), "ENDTAG($})");
    assert_eq!(TokenKind::TagName.to_string(), "TAGNAME(=)");
    assert_eq!(TokenKind::Integer(-4).to_string(), "INTEGER(-4)");
    assert_eq!(TokenKind::Double(12.0).to_string(), "DOUBLE(12.0)");
    assert_eq!(TokenKind::Function("sin".into()).to_string(), "FUNCTION(@sin)");
    assert_eq!(TokenKind::Text("a\nb".into()).to_string(), "TEXT(\"a\\nb\")");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn eof_detection() {
    assert!(Token::new(TokenKind::Eof, Span::point(3)).is_eof());
    assert!(!Token::new(TokenKind::For, Span::new(0, 3)).is_eof());
}

#[test]
fn debug_includes_span() {
    let token = Token::new(TokenKind::End, Span::new(2, 5));
    assert_eq!(format!("{token:?}"), "End @ 2..5");
}
