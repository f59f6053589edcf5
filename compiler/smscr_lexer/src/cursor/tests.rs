use super::*;

#[test]
fn bump_walks_multibyte_chars() {
    let mut cursor = Cursor::new("aš{");
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.bump(), Some('š'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), Some('{'));
    assert_eq!(cursor.bump(), Some('{'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), None);
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("abc123 rest");
    let start = cursor.pos();
    cursor.eat_while(char::is_alphanumeric);
    assert_eq!(cursor.slice_from(start), "abc123");
    assert_eq!(cursor.span_from(start), Span::new(0, 6));
    assert_eq!(cursor.rest(), " rest");
}

#[test]
fn lookahead() {
    let mut cursor = Cursor::new("{$x");
    assert!(cursor.starts_with("{$"));
    assert_eq!(cursor.peek_next(), Some('$'));
    cursor.advance(2);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.peek_next(), None);
}

#[test]
fn advance_clamps_at_end() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.rest(), "");
}
