use super::*;

#[test]
fn message_includes_kind_and_span() {
    let err = LexError::new(LexErrorKind::UnrecognizedCharacter('#'), Span::new(4, 5));
    assert_eq!(err.to_string(), "unrecognized character `#` inside tag at 4..5");
}

#[test]
fn malformed_number_quotes_literal() {
    let err = LexError::new(LexErrorKind::MalformedNumber("1.2.3".into()), Span::new(0, 5));
    assert_eq!(err.kind.to_string(), "malformed number `1.2.3`");
}
