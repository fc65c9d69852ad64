//! Map from normalized-text offsets back to original line numbers.

use std::collections::BTreeMap;

/// Sparse map: an entry `(offset, line)` says that the original 0-based
/// `line` ended at byte `offset` of the normalized text.
///
/// Lines that produced no output have no entry. A position belongs to the
/// first entry at or after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMap {
    entries: BTreeMap<u32, u32>,
}

impl LineMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, offset: u32, line: u32) {
        self.entries.insert(offset, line);
    }

    /// Exact entry at `offset`.
    pub fn get(&self, offset: u32) -> Option<u32> {
        self.entries.get(&offset).copied()
    }

    /// Original 0-based line that produced the byte at `offset`.
    pub fn line_for(&self, offset: u32) -> Option<u32> {
        self.entries.range(offset..).next().map(|(_, &line)| line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(&offset, &line)| (offset, line))
    }
}
