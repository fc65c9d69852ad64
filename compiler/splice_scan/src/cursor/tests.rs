use pretty_assertions::assert_eq;

use crate::delimiters::TOKEN_SEPARATION;
use crate::{ScanConfig, ScanErrorKind, SourceBuffer, TerminatorSet};

#[test]
fn empty_source_is_eof() {
    let buffer = SourceBuffer::new("");
    let cursor = buffer.cursor();
    assert!(cursor.is_eof());
    assert!(!cursor.still_valid());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.prev(), 0);
}

#[test]
fn current_prev_peek() {
    let buffer = SourceBuffer::new("abc");
    let mut cursor = buffer.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    cursor.advance();
    assert_eq!(cursor.prev(), b'a');
    assert_eq!(cursor.current(), b'b');
    cursor.advance_n(5);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.prev(), b'c');
}

#[test]
fn advance_stops_at_eof() {
    let buffer = SourceBuffer::new("a");
    let mut cursor = buffer.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn move_forward_if() {
    let buffer = SourceBuffer::new(",x");
    let mut cursor = buffer.cursor();
    assert!(!cursor.move_forward_if(b';'));
    assert!(cursor.move_forward_if(b','));
    assert_eq!(cursor.current(), b'x');
    assert!(cursor.move_forward_if_any(b"yx"));
    assert!(cursor.is_eof());
    assert!(!cursor.move_forward_if(0));
}

#[test]
fn eat_spaces() {
    let buffer = SourceBuffer::new("   x ");
    let mut cursor = buffer.cursor();
    cursor.eat_spaces();
    assert_eq!(cursor.pos(), 3);
    cursor.advance();
    cursor.eat_spaces();
    assert!(cursor.is_eof());
}

#[test]
fn escapes_count_backslash_runs() {
    let buffer = SourceBuffer::new(r#"a\"b\\"c"#);
    let cursor = buffer.cursor();
    assert!(!cursor.is_escaped_at(0));
    assert!(cursor.is_escaped_at(2));
    assert!(!cursor.is_escaped_at(6));
}

#[test]
fn find_and_find_unescaped() {
    let buffer = SourceBuffer::new(r#"ab\"cd"e"#);
    let cursor = buffer.cursor();
    assert_eq!(cursor.find(b'"', 0), Some(3));
    assert_eq!(cursor.find_unescaped(b'"', 0), Some(6));
    assert_eq!(cursor.find(b'z', 0), None);
    assert_eq!(cursor.find(b'a', 99), None);
}

#[test]
fn find_first_of() {
    let buffer = SourceBuffer::new("abc+d(e)");
    let cursor = buffer.cursor();
    assert_eq!(cursor.find_first_of(TOKEN_SEPARATION, 0), Some(3));
    assert_eq!(cursor.find_first_of(TOKEN_SEPARATION, 4), Some(5));
    assert_eq!(cursor.find_first_of(TerminatorSet::single(b'z'), 0), None);
}

#[test]
fn slices_never_panic() {
    let buffer = SourceBuffer::new("héllo");
    let mut cursor = buffer.cursor();
    assert_eq!(cursor.slice(0, 1), "h");
    assert_eq!(cursor.slice(0, 2), "");
    assert_eq!(cursor.slice(3, 1), "");
    assert_eq!(cursor.slice(0, 99), "");
    cursor.set_pos(3);
    assert_eq!(cursor.slice_from(0), "hé");
    assert_eq!(cursor.rest(), "llo");
}

#[test]
fn excerpt_respects_char_boundaries() {
    let buffer = SourceBuffer::new("ééééé");
    let cursor = buffer.cursor();
    assert_eq!(cursor.excerpt(0, 2), "éé");
    assert_eq!(cursor.excerpt(0, 10), "ééééé");
}

#[test]
fn copies_are_independent() {
    let buffer = SourceBuffer::new("abc");
    let mut cursor = buffer.cursor();
    let mut shadow = cursor;
    shadow.advance_n(2);
    assert_eq!(cursor.pos(), 0);
    cursor.advance();
    assert_eq!(shadow.pos(), 2);
}

#[test]
fn nested_tracks_and_restores_depth() {
    let buffer = SourceBuffer::new("x");
    let mut cursor = buffer.cursor();
    let inner = cursor.nested(|c| c.nested(|c| Ok(c.depth())));
    assert_eq!(inner, Ok(2));
    assert_eq!(cursor.depth(), 0);
}

#[test]
fn nested_fails_past_budget() {
    let buffer = SourceBuffer::with_config("x", ScanConfig::default().with_max_depth(3));
    let mut cursor = buffer.cursor();

    fn dive(cursor: &mut crate::Cursor<'_>) -> crate::ScanResult<u32> {
        cursor.nested(dive)
    }

    let err = dive(&mut cursor).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::NestingTooDeep { limit: 3 });
    assert_eq!(cursor.depth(), 0);
}
