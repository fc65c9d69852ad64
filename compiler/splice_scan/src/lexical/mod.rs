//! Tokens and expression boundaries.
//!
//! These functions never build a token stream. Each call looks at the text
//! under the cursor, carves out one unit and leaves the cursor after it.

use crate::delimiters::{
    BACKSLASH, END_ARG, END_GROUP, END_STATEMENT, NEXT_ARG, QUOTE, SPACE, START_ARG,
    TOKEN_SEPARATION,
};
use crate::error::unterminated_quote;
use crate::{Cursor, ScanResult, TerminatorSet};

/// Characters of source shown in an unterminated-quote message.
const QUOTE_CONTEXT_CHARS: usize = 40;

/// Read one token, quoted or bare.
///
/// Unless `terminators` contains a space, the whole run of leading spaces is
/// skipped first, not just a single one. Spaces right after a quote are kept.
///
/// A token starting with `"` runs to the next unescaped `"` and the cursor
/// ends just past it. A bare token runs to the first character of
/// `terminators` that is not escaped by a backslash; a trailing quote and
/// spaces after it are consumed.
///
/// # Errors
///
/// [`UnterminatedQuote`](crate::ScanErrorKind::UnterminatedQuote) when a
/// quoted token has no closing quote.
pub fn scan_token(cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<String> {
    if !terminators.contains(SPACE) {
        while cursor.current() == SPACE && cursor.prev() != QUOTE {
            cursor.advance();
        }
    }

    if cursor.current() == QUOTE {
        return scan_quoted(cursor);
    }

    let start = cursor.pos();
    let len = cursor.len();
    let mut end = cursor.find_first_of(terminators, start).unwrap_or(len);
    while end < len && cursor.is_escaped_at(end) {
        end = cursor.find_first_of(terminators, end + 1).unwrap_or(len);
    }
    if end > start && cursor.at(end - 1) == QUOTE {
        end -= 1;
    }

    let token = unescape(cursor.slice(start, end), terminators);
    cursor.set_pos(end);
    cursor.move_forward_if(QUOTE);
    cursor.eat_spaces();
    Ok(token)
}

fn scan_quoted(cursor: &mut Cursor<'_>) -> ScanResult<String> {
    let open = cursor.pos();
    let Some(close) = cursor.find_unescaped(QUOTE, open + 1) else {
        let err = unterminated_quote(cursor.excerpt(open, QUOTE_CONTEXT_CHARS));
        return Err(err.located(cursor));
    };
    let token = unescape(cursor.slice(open + 1, close), TerminatorSet::EMPTY);
    cursor.set_pos(close + 1);
    Ok(token)
}

/// Drop the backslash in front of a quote or a terminator.
fn unescape(raw: &str, terminators: TerminatorSet) -> String {
    if !raw.as_bytes().contains(&BACKSLASH) {
        return raw.to_owned();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                let literal =
                    next == '"' || u8::try_from(next).is_ok_and(|b| terminators.contains(b));
                if literal {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Text up to the next token separator, without quote or escape handling.
///
/// Empty when the cursor is exhausted or no separator follows; the cursor is
/// left where it was in that case.
pub fn next_token<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    if cursor.is_eof() {
        return "";
    }
    let start = cursor.pos();
    let Some(end) = cursor.find_first_of(TOKEN_SEPARATION, start) else {
        return "";
    };
    cursor.set_pos(end);
    cursor.slice(start, end)
}

/// Advance past the rest of one argument without evaluating it.
///
/// Stops, without consuming, on `;`, on a `,` outside parentheses, or on the
/// `)` that closes the enclosing list.
pub fn skip_expression(cursor: &mut Cursor<'_>) {
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    while cursor.still_valid() {
        let ch = cursor.current();
        if ch == QUOTE {
            if !cursor.is_escaped_at(cursor.pos()) {
                in_quotes = !in_quotes;
            }
        } else if !in_quotes {
            match ch {
                START_ARG => depth += 1,
                END_ARG => {
                    depth -= 1;
                    if depth < 0 {
                        return;
                    }
                }
                END_STATEMENT => return,
                NEXT_ARG if depth <= 0 => return,
                _ => {}
            }
        }
        cursor.advance();
    }
}

/// Whether another argument follows in the current list.
///
/// Looks ahead for a `,` before the enclosing list or statement closes.
/// Does not move the cursor.
pub fn has_separator_ahead(cursor: &Cursor<'_>) -> bool {
    let mut depth: i32 = 0;
    for pos in cursor.pos()..cursor.len() {
        match cursor.at(pos) {
            NEXT_ARG => return true,
            START_ARG => depth += 1,
            END_STATEMENT | END_GROUP | END_ARG => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    false
}

pub fn is_compare_sign(ch: u8) -> bool {
    matches!(ch, b'<' | b'>' | b'=')
}

pub fn is_and_or_sign(ch: u8) -> bool {
    matches!(ch, b'&' | b'|')
}

/// `"!"` when `text` starts with a logical not (and not with `!=`).
pub fn not_sign(text: &str) -> Option<&'static str> {
    (text.starts_with('!') && !text.starts_with("!=")).then_some("!")
}

/// First of `items` that `text` starts with.
pub fn starts_with_any<'i>(text: &str, items: &[&'i str]) -> Option<&'i str> {
    items.iter().copied().find(|item| text.starts_with(item))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
