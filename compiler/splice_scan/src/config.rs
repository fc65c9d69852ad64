//! Scanner configuration.

use splice_stack::DepthLimit;

use crate::NormalizeOptions;

/// Indentation step used by [`beautify`](crate::beautify).
pub const DEFAULT_INDENT: usize = 2;

/// Settings shared by everything that scans one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Budget on nested argument lists.
    pub depth_limit: DepthLimit,
    /// Keyword tables for the normalizer.
    pub normalize: NormalizeOptions,
    /// Indentation step for the beautifier.
    pub indent: usize,
}

impl ScanConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max: u32) -> Self {
        self.depth_limit = DepthLimit::new(max);
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            depth_limit: DepthLimit::DEFAULT,
            normalize: NormalizeOptions::default(),
            indent: DEFAULT_INDENT,
        }
    }
}
