//! Balanced-delimiter bodies.

use crate::delimiters::QUOTE;
use crate::error::unbalanced_delimiter;
use crate::{Cursor, DelimiterPair, ScanResult};

/// Body of a delimited region whose opener has already been consumed.
///
/// Leading whitespace is skipped. The body ends at the `close` that brings
/// the depth to -1; the cursor is left on that character. Delimiters inside
/// quotes or preceded by a backslash do not count. For
/// [`DelimiterPair::QUOTES`] the body simply ends at the next unescaped
/// quote.
///
/// # Errors
///
/// [`UnbalancedDelimiter`](crate::ScanErrorKind::UnbalancedDelimiter) when
/// the input ends first.
pub fn matched_body<'a>(cursor: &mut Cursor<'a>, pair: DelimiterPair) -> ScanResult<&'a str> {
    while cursor.current().is_ascii_whitespace() {
        cursor.advance();
    }

    let start = cursor.pos();
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    while cursor.still_valid() {
        let ch = cursor.current();
        let escaped = cursor.is_escaped_at(cursor.pos());
        if pair.is_quote() {
            if ch == QUOTE && !escaped {
                depth -= 1;
            }
        } else if !escaped {
            if ch == QUOTE {
                in_quotes = !in_quotes;
            } else if !in_quotes && ch == pair.open() {
                depth += 1;
            } else if !in_quotes && ch == pair.close() {
                depth -= 1;
            }
        }

        if depth == -1 {
            return Ok(cursor.slice(start, cursor.pos()));
        }
        cursor.advance();
    }

    Err(unbalanced_delimiter(pair).located(cursor))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ScanErrorKind, SourceBuffer};

    #[test]
    fn nested_braces() {
        let buffer = SourceBuffer::new("{a{b}c}");
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(matched_body(&mut cursor, DelimiterPair::BRACES).unwrap(), "a{b}c");
        assert_eq!(cursor.pos(), 6);
        assert_eq!(cursor.current(), b'}');
    }

    #[test]
    fn leading_whitespace_skipped() {
        let buffer = SourceBuffer::new("(  \tx + 1)");
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(matched_body(&mut cursor, DelimiterPair::PARENS).unwrap(), "x + 1");
    }

    #[test]
    fn empty_body() {
        let buffer = SourceBuffer::new("()");
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(matched_body(&mut cursor, DelimiterPair::PARENS).unwrap(), "");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn delimiters_in_quotes_ignored() {
        let buffer = SourceBuffer::new(r#"(f(")"),x)y"#);
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(
            matched_body(&mut cursor, DelimiterPair::PARENS).unwrap(),
            r#"f(")"),x"#
        );
        assert_eq!(cursor.current(), b')');
        assert_eq!(cursor.peek(), b'y');
    }

    #[test]
    fn escaped_delimiter_ignored() {
        let buffer = SourceBuffer::new(r"[a\]b]");
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(
            matched_body(&mut cursor, DelimiterPair::BRACKETS).unwrap(),
            r"a\]b"
        );
    }

    #[test]
    fn quote_pair_stops_at_unescaped_quote() {
        let buffer = SourceBuffer::new(r#""a\"b{"c"#);
        let mut cursor = buffer.cursor();
        cursor.advance();
        assert_eq!(
            matched_body(&mut cursor, DelimiterPair::QUOTES).unwrap(),
            r#"a\"b{"#
        );
        assert_eq!(cursor.current(), b'"');
    }

    #[test]
    fn unbalanced_fails() {
        let buffer = SourceBuffer::new("(a(b)");
        let mut cursor = buffer.cursor();
        cursor.advance();
        let err = matched_body(&mut cursor, DelimiterPair::PARENS).unwrap_err();
        assert_eq!(
            err.kind,
            ScanErrorKind::UnbalancedDelimiter {
                open: '(',
                close: ')'
            }
        );
        assert!(cursor.is_eof());
    }
}
