//! Position within a [`SourceBuffer`].
//!
//! A cursor is a buffer reference, a byte offset and the current nesting
//! depth. It is [`Copy`]: scans that need to look ahead (the argument parser
//! finding where a list ends, for one) copy the cursor, run the copy, and
//! read its position.
//!
//! Reads past the end never panic. [`current()`](Cursor::current) returns
//! `0x00` at EOF, and every significant character is non-zero, so scanning
//! loops terminate at EOF without extra bounds checks.

use splice_stack::ensure_sufficient_stack;

use crate::delimiters::{BACKSLASH, SPACE};
use crate::error::nesting_too_deep;
use crate::{ScanResult, SourceBuffer, SourceLine, TerminatorSet};

/// Byte cursor over a [`SourceBuffer`].
///
/// Created via [`SourceBuffer::cursor()`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buffer: &'a SourceBuffer,
    bytes: &'a [u8],
    pos: u32,
    /// Argument lists entered so far.
    depth: u32,
}

/// &SourceBuffer = 8, &[u8] = 16, u32 = 4, u32 = 4 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buffer: &'a SourceBuffer, pos: u32) -> Self {
        Cursor {
            buffer,
            bytes: buffer.as_bytes(),
            pos,
            depth: 0,
        }
    }

    pub fn buffer(&self) -> &'a SourceBuffer {
        self.buffer
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move to `pos`, clamped to the end of the buffer.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.len());
    }

    /// Length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.buffer.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len()
    }

    #[inline]
    pub fn still_valid(&self) -> bool {
        !self.is_eof()
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.at(self.pos)
    }

    /// Byte before the current position, `0x00` at the start.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(pos) => self.at(pos),
            None => 0,
        }
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.at(self.pos.saturating_add(1))
    }

    /// Byte at `pos`, `0x00` out of range.
    #[inline]
    pub fn at(&self, pos: u32) -> u8 {
        self.bytes.get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.len() {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.set_pos(self.pos.saturating_add(n));
    }

    /// Step over `byte` if it is the current one.
    pub fn move_forward_if(&mut self, byte: u8) -> bool {
        let matched = self.still_valid() && self.current() == byte;
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Step over the current byte if it is one of `bytes`.
    pub fn move_forward_if_any(&mut self, bytes: &[u8]) -> bool {
        let matched = self.still_valid() && bytes.contains(&self.current());
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Skip a run of spaces.
    pub fn eat_spaces(&mut self) {
        while self.current() == SPACE {
            self.pos += 1;
        }
    }

    /// Whether the byte at `pos` follows an odd number of backslashes.
    pub fn is_escaped_at(&self, pos: u32) -> bool {
        let preceding = self.bytes.get(..pos as usize).unwrap_or_default();
        let run = preceding
            .iter()
            .rev()
            .take_while(|&&b| b == BACKSLASH)
            .count();
        run % 2 == 1
    }

    /// First occurrence of `byte` at or after `from`.
    pub fn find(&self, byte: u8, from: u32) -> Option<u32> {
        let rest = self.bytes.get(from as usize..)?;
        memchr::memchr(byte, rest).map(|offset| from + to_u32(offset))
    }

    /// First unescaped occurrence of `byte` at or after `from`.
    pub fn find_unescaped(&self, byte: u8, from: u32) -> Option<u32> {
        let mut search = from;
        loop {
            let found = self.find(byte, search)?;
            if !self.is_escaped_at(found) {
                return Some(found);
            }
            search = found + 1;
        }
    }

    /// First byte at or after `from` that belongs to `set`.
    pub fn find_first_of(&self, set: TerminatorSet, from: u32) -> Option<u32> {
        let rest = self.bytes.get(from as usize..)?;
        rest.iter()
            .position(|&b| set.contains(b))
            .map(|offset| from + to_u32(offset))
    }

    /// Text between two offsets.
    ///
    /// Empty if the range is reversed, out of bounds, or splits a UTF-8
    /// sequence. Offsets produced by scanning stop on ASCII bytes and are
    /// always valid boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.buffer
            .text()
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Text from the current position to the end.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos, self.len())
    }

    /// Up to `max_chars` characters starting at `start`, for error messages.
    pub fn excerpt(&self, start: u32, max_chars: usize) -> &'a str {
        let text = self.slice(start, self.len());
        match text.char_indices().nth(max_chars) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// Original source line of the current position, when known.
    pub fn original_line(&self) -> Option<SourceLine> {
        self.buffer.original_line(self.pos)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Same cursor, already `depth` levels deep.
    pub(crate) fn at_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Fails with [`NestingTooDeep`](crate::ScanErrorKind::NestingTooDeep)
    /// once the configured budget is spent. The depth is restored on both
    /// success and failure.
    pub fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> ScanResult<R>) -> ScanResult<R> {
        let limit = self.buffer.config().depth_limit;
        let outer = self.depth;
        self.depth = limit
            .descend(outer)
            .map_err(|exceeded| nesting_too_deep(exceeded.limit).located(self))?;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth = outer;
        result
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are within a buffer whose length fits u32"
)]
#[inline]
fn to_u32(offset: usize) -> u32 {
    offset as u32
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
