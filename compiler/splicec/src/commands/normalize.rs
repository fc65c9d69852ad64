//! The `normalize` command: print the compact form of source files.
//!
//! Several files are normalized in parallel; output keeps argument order.

use std::fmt::Write as _;

use rayon::prelude::*;
use splice_scan::normalize::normalize_with;
use splice_scan::NormalizeOptions;
use tracing::debug;

use super::{fail, try_read_file};

/// Compact text, optionally followed by its line map.
///
/// Map lines read `  <offset> -> line <n>`: the byte at `offset` is the
/// last one produced by source line `n` (1-based).
pub fn render_normalized(source: &str, options: &NormalizeOptions, line_map: bool) -> String {
    let normalized = normalize_with(source, options);
    let mut out = normalized.text;
    out.push('\n');
    if line_map {
        for (offset, line) in normalized.line_map.iter() {
            let _ = writeln!(out, "  {offset} -> line {}", line + 1);
        }
    }
    out
}

/// Normalize every file in `paths` and print the results in order.
///
/// With more than one file each result is preceded by a `==> path <==`
/// banner. Exits with status 1 if any file could not be read.
pub fn normalize_files(paths: &[String], options: &NormalizeOptions, line_map: bool) {
    if paths.is_empty() {
        fail("normalize needs at least one file");
    }

    let results: Vec<Result<String, String>> = paths
        .par_iter()
        .map(|path| -> Result<String, String> {
            let source = try_read_file(path)?;
            Ok(render_normalized(&source, options, line_map))
        })
        .collect();
    debug!(files = paths.len(), "normalized files");

    let mut failed = false;
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(text) => {
                if paths.len() > 1 {
                    println!("==> {path} <==");
                }
                print!("{text}");
            }
            Err(msg) => {
                eprintln!("error: {msg}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
