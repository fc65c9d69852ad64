//! Owned script text that cursors borrow from.
//!
//! A buffer holds the text being scanned plus whatever is needed to turn a
//! position back into something a human can read: the file name, the
//! [`LineMap`] produced by normalization and the original source lines.
//! Buffers are immutable after construction, so any number of cursors (on
//! any number of threads) may read one at the same time.

use std::sync::Arc;

use crate::normalize::normalize_with;
use crate::{Cursor, LineMap, ScanConfig, SourceLine};

/// Immutable script text with its diagnostics context.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: Arc<str>,
    /// Length of `text` in bytes, saturated at `u32::MAX`.
    len: u32,
    filename: Option<Arc<str>>,
    line_map: LineMap,
    /// Source before normalization; `None` when `text` was used as given.
    original: Option<Arc<str>>,
    config: ScanConfig,
}

impl SourceBuffer {
    /// Buffer over `text` as given, with the default configuration.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, ScanConfig::default())
    }

    /// Buffer over `text` as given.
    pub fn with_config(text: &str, config: ScanConfig) -> Self {
        SourceBuffer {
            text: Arc::from(text),
            len: saturating_len(text),
            filename: None,
            line_map: LineMap::new(),
            original: None,
            config,
        }
    }

    /// Normalize a source file and wrap the result.
    ///
    /// Errors located in the returned buffer report `filename` and the line
    /// of `source` they came from.
    pub fn from_script(source: &str, filename: Option<&str>, config: ScanConfig) -> Self {
        let normalized = normalize_with(source, &config.normalize);
        SourceBuffer {
            len: saturating_len(&normalized.text),
            text: Arc::from(normalized.text),
            filename: filename.map(Arc::from),
            line_map: normalized.line_map,
            original: Some(Arc::from(source)),
            config,
        }
    }

    /// Cursor positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }

    /// Cursor positioned at `pos` (clamped to the end).
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(self, pos.min(self.len))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The original source line that produced the byte at `pos`.
    ///
    /// The end-of-input position belongs to the last line. Best effort:
    /// `None` for buffers that were not normalized from a source file, or
    /// for positions past the end.
    pub fn original_line(&self, pos: u32) -> Option<SourceLine> {
        let original = self.original.as_deref()?;
        let pos = if pos == self.len { pos.saturating_sub(1) } else { pos };
        let line = self.line_map.line_for(pos)?;
        let text = original.lines().nth(line as usize)?;
        Some(SourceLine {
            number: line + 1,
            text: text.trim().to_owned(),
        })
    }
}

fn saturating_len(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}
