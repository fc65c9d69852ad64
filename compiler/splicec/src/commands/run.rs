//! The `run` command: evaluate a script file statement by statement.

use splice_eval::{run, Interpreter};
use splice_scan::{ScanConfig, ScanResult, SourceBuffer};
use tracing::debug;

use super::{fail, read_file};

/// Run `source` on a fresh interpreter.
///
/// Returns the display form of every expression statement's value, in
/// order. Errors name `filename` and the original line when known.
pub fn run_source(
    source: &str,
    filename: Option<&str>,
    config: ScanConfig,
) -> ScanResult<Vec<String>> {
    let buffer = SourceBuffer::from_script(source, filename, config);
    debug!(
        source = source.len(),
        compact = buffer.len(),
        "running script"
    );
    let mut interpreter = Interpreter::new();
    let values = run(&buffer, &mut interpreter)?;
    Ok(values.iter().map(ToString::to_string).collect())
}

/// Run the script at `path`, printing one line per expression statement.
pub fn run_file(path: &str, config: ScanConfig) {
    let source = read_file(path);
    match run_source(&source, Some(path), config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => fail(&e.to_string()),
    }
}
