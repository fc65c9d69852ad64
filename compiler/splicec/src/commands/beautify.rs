//! The `beautify` command: normalize a file and lay it out again.

use std::path::Path;

use splice_scan::beautify::beautify_with_indent;
use splice_scan::normalize::normalize_with;
use splice_scan::ScanConfig;

use super::read_file;

/// Block header used when none is given: the file stem followed by ` {`.
pub(crate) fn default_header(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map_or_else(|| path.to_string(), |s| s.to_string_lossy().into_owned());
    format!("{stem} {{")
}

/// Normalize `source` and re-indent it under `header`.
pub fn beautify_source(source: &str, header: &str, config: &ScanConfig) -> String {
    let normalized = normalize_with(source, &config.normalize);
    beautify_with_indent(&normalized.text, header, config.indent)
}

/// Print the beautified form of the file at `path`.
pub fn beautify_file(path: &str, header: Option<&str>, config: &ScanConfig) {
    let source = read_file(path);
    let header = header.map_or_else(|| default_header(path), str::to_string);
    print!("{}", beautify_source(&source, &header, config));
}
