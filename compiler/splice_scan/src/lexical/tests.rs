use pretty_assertions::assert_eq;

use super::*;
use crate::delimiters::ITEM_TERMINATORS;
use crate::{ScanErrorKind, SourceBuffer};

fn set(bytes: &[u8]) -> TerminatorSet {
    TerminatorSet::new(bytes)
}

// scan_token

#[test]
fn quoted_token_unescapes_quotes() {
    let buffer = SourceBuffer::new(r#""a\"b",x"#);
    let mut cursor = buffer.cursor();
    let token = scan_token(&mut cursor, ITEM_TERMINATORS).unwrap();
    assert_eq!(token, r#"a"b"#);
    assert_eq!(cursor.current(), b',');
}

#[test]
fn quoted_token_keeps_terminators() {
    let buffer = SourceBuffer::new(r#""a,b;c")"#);
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "a,b;c");
    assert_eq!(cursor.current(), b')');
}

#[test]
fn unterminated_quote_fails() {
    let buffer = SourceBuffer::new(r#""abc\""#);
    let mut cursor = buffer.cursor();
    let err = scan_token(&mut cursor, ITEM_TERMINATORS).unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::UnterminatedQuote {
            context: r#""abc\""#.into()
        }
    );
}

#[test]
fn bare_token_stops_at_terminator() {
    let buffer = SourceBuffer::new("abc,def");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "abc");
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn bare_token_runs_to_end() {
    let buffer = SourceBuffer::new("abc");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "abc");
    assert!(cursor.is_eof());
}

#[test]
fn leading_spaces_skipped() {
    let buffer = SourceBuffer::new("   abc;");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, set(b";")).unwrap(), "abc");
    assert_eq!(cursor.current(), b';');
}

#[test]
fn spaces_kept_when_space_terminates() {
    let buffer = SourceBuffer::new(" abc");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, set(b" ")).unwrap(), "");
}

#[test]
fn escaped_terminator_is_literal() {
    let buffer = SourceBuffer::new(r"a\,b,c");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "a,b");
    assert_eq!(cursor.current(), b',');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn trailing_quote_excluded_and_consumed() {
    let buffer = SourceBuffer::new(r#"abc",x"#);
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "abc");
    assert_eq!(cursor.current(), b',');
}

// next_token

#[test]
fn next_token_reads_to_separator() {
    let buffer = SourceBuffer::new("size(x)");
    let mut cursor = buffer.cursor();
    assert_eq!(next_token(&mut cursor), "size");
    assert_eq!(cursor.current(), b'(');
}

#[test]
fn next_token_without_separator_is_empty() {
    let buffer = SourceBuffer::new("abc");
    let mut cursor = buffer.cursor();
    assert_eq!(next_token(&mut cursor), "");
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn next_token_at_separator_is_empty() {
    let buffer = SourceBuffer::new("+1");
    let mut cursor = buffer.cursor();
    assert_eq!(next_token(&mut cursor), "");
    assert_eq!(cursor.pos(), 0);
}

// skip_expression

#[test]
fn skip_stops_at_comma() {
    let buffer = SourceBuffer::new("a,b)");
    let mut cursor = buffer.cursor();
    skip_expression(&mut cursor);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), b',');
}

#[test]
fn skip_steps_over_nested_call() {
    let buffer = SourceBuffer::new("a(b,c),d");
    let mut cursor = buffer.cursor();
    skip_expression(&mut cursor);
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b',');
}

#[test]
fn skip_stops_at_closing_paren() {
    let buffer = SourceBuffer::new("b)+1");
    let mut cursor = buffer.cursor();
    skip_expression(&mut cursor);
    assert_eq!(cursor.current(), b')');
}

#[test]
fn skip_ignores_quoted_separators() {
    let buffer = SourceBuffer::new(r#""a,\"b)";c"#);
    let mut cursor = buffer.cursor();
    skip_expression(&mut cursor);
    assert_eq!(cursor.current(), b';');
}

#[test]
fn skip_runs_to_end() {
    let buffer = SourceBuffer::new("abc");
    let mut cursor = buffer.cursor();
    skip_expression(&mut cursor);
    assert!(cursor.is_eof());
}

// has_separator_ahead

#[test]
fn separator_ahead() {
    let buffer = SourceBuffer::new("a,b)");
    let cursor = buffer.cursor();
    assert!(has_separator_ahead(&cursor));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn separator_after_list_end_not_seen() {
    let buffer = SourceBuffer::new("a),b");
    assert!(!has_separator_ahead(&buffer.cursor()));
}

#[test]
fn separator_inside_nested_call_counts() {
    let buffer = SourceBuffer::new("f(a,b))");
    assert!(has_separator_ahead(&buffer.cursor()));
}

#[test]
fn no_separator_at_eof() {
    let buffer = SourceBuffer::new("");
    assert!(!has_separator_ahead(&buffer.cursor()));
}

// signs

#[test]
fn sign_helpers() {
    assert!(is_compare_sign(b'<'));
    assert!(is_compare_sign(b'='));
    assert!(!is_compare_sign(b'!'));
    assert!(is_and_or_sign(b'|'));
    assert!(!is_and_or_sign(b'+'));
    assert_eq!(not_sign("!x"), Some("!"));
    assert_eq!(not_sign("!=x"), None);
    assert_eq!(not_sign("x"), None);
    assert_eq!(starts_with_any("+=1", &["=", "+=", "-="]), Some("+="));
    assert_eq!(starts_with_any("x", &["="]), None);
}

#[test]
fn leading_space_run_is_skipped() {
    let buffer = SourceBuffer::new("   abc,d");
    let mut cursor = buffer.cursor();
    assert_eq!(scan_token(&mut cursor, ITEM_TERMINATORS).unwrap(), "abc");
    assert_eq!(cursor.current(), b',');
}
