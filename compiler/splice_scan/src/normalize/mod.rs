//! Source normalization.
//!
//! Turns a script as written into the compact form the scanner works on:
//! comments removed, line breaks removed, and spaces kept only where they
//! separate words (`print x`, `return y`). Quoted text passes through
//! untouched. A [`LineMap`] records where each original line ended in the
//! output so errors can point back at the source.
//!
//! # Space Rules
//!
//! Outside quotes a space survives only if
//!
//! - the output so far ends with a keyword and the next character starts
//!   an operand (not a space, `(`, `{`, `[` or end of input), or
//! - an earlier `keep_space` keyword on this statement turned on the sticky
//!   space flag and the last emitted character is not a `,`.
//!
//! `)`, `}`, `;` and newlines turn the sticky flag off. Runs of spaces never
//! survive as more than one.

use bitflags::bitflags;
use tracing::debug;

use crate::delimiters::TOKEN_SEPARATION;
use crate::LineMap;

/// Keyword tables that decide which spaces survive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Keywords after which spaces are kept for the rest of the statement.
    pub keep_space: Vec<String>,
    /// Keywords followed by exactly one kept space.
    pub keep_space_once: Vec<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            keep_space: ["function", "include", "new", "print"]
                .map(String::from)
                .to_vec(),
            keep_space_once: ["return", "throw", "not", "and", "or"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Compact text plus the map back to original lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub line_map: LineMap,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct State: u8 {
        const IN_QUOTES = 1 << 0;
        const IN_COMMENT = 1 << 1;
        /// The comment ends at the newline rather than at `*/`.
        const LINE_COMMENT = 1 << 2;
        const SPACE_OK = 1 << 3;
    }
}

/// Normalize with the default keyword tables.
pub fn normalize(source: &str) -> Normalized {
    normalize_with(source, &NormalizeOptions::default())
}

/// Normalize `source` in a single pass.
pub fn normalize_with(source: &str, options: &NormalizeOptions) -> Normalized {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut line_map = LineMap::new();
    let mut state = State::empty();
    let mut line: u32 = 0;
    let mut last_len = 0;
    let mut previous = '\0';

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied().unwrap_or('\0');
        i += 1;

        if ch == '\n' {
            if out.len() > last_len {
                line_map.insert(last_offset(&out), line);
                last_len = out.len();
            }
            line += 1;
        }

        if state.contains(State::IN_COMMENT) {
            let closes_line = state.contains(State::LINE_COMMENT) && ch == '\n';
            let closes_block =
                !state.contains(State::LINE_COMMENT) && ch == '*' && next == '/';
            if closes_block {
                i += 1;
            }
            if !(closes_line || closes_block) {
                continue;
            }
            state.remove(State::IN_COMMENT | State::LINE_COMMENT);
            if closes_block {
                continue;
            }
        }

        let in_quotes = state.contains(State::IN_QUOTES);
        match ch {
            '/' if !in_quotes && (next == '/' || next == '*') => {
                state.insert(State::IN_COMMENT);
                state.set(State::LINE_COMMENT, next == '/');
                i += 1;
                continue;
            }
            '"' | '\u{201C}' | '\u{201D}' => {
                if previous != '\\' {
                    state.toggle(State::IN_QUOTES);
                }
                out.push('"');
            }
            ' ' if !in_quotes => {
                let kept = space_needed(next) && ends_with_keyword(&out, &options.keep_space);
                let sticky = kept
                    || (previous != '\0'
                        && previous != ','
                        && state.contains(State::SPACE_OK));
                state.set(State::SPACE_OK, sticky);
                let once =
                    space_needed(next) && ends_with_keyword(&out, &options.keep_space_once);
                if (sticky || once) && !out.ends_with(' ') {
                    out.push(' ');
                }
                continue;
            }
            '\t' | '\r' if !in_quotes => continue,
            '\n' => {
                state.remove(State::SPACE_OK);
                continue;
            }
            ')' | '}' | ';' if !in_quotes => {
                state.remove(State::SPACE_OK);
                out.push(ch);
            }
            _ => out.push(ch),
        }
        previous = ch;
    }

    if out.len() > last_len {
        line_map.insert(last_offset(&out), line);
    }

    debug!(
        input = source.len(),
        output = out.len(),
        lines = line_map.len(),
        "normalized source"
    );
    Normalized {
        text: out,
        line_map,
    }
}

/// Offset of the last byte written so far.
fn last_offset(out: &str) -> u32 {
    u32::try_from(out.len().saturating_sub(1)).unwrap_or(u32::MAX)
}

/// A kept space must be followed by an operand.
fn space_needed(next: char) -> bool {
    !matches!(next, ' ' | '(' | '{' | '[' | '\0')
}

/// Whether `out` ends with one of `keywords` as a whole word.
///
/// Case-insensitive. The keyword must start the output or follow a token
/// separator.
fn ends_with_keyword(out: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|key| {
        let Some(start) = out.len().checked_sub(key.len()) else {
            return false;
        };
        let Some(tail) = out.get(start..) else {
            return false;
        };
        if !tail.eq_ignore_ascii_case(key) {
            return false;
        }
        match out[..start].bytes().next_back() {
            Some(before) => TOKEN_SEPARATION.contains(before),
            None => true,
        }
    })
}
