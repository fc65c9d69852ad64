//! Command handlers for the Splice CLI.
//!
//! Each submodule implements one subcommand. Handlers that print and exit
//! are thin wrappers around functions returning the text to print, which is
//! what the tests exercise.

mod beautify;
mod eval;
mod normalize;
mod run;

pub use beautify::{beautify_file, beautify_source};
pub use eval::{eval_expression, evaluate_expression};
pub use normalize::{normalize_files, render_normalized};
pub use run::{run_file, run_source};

/// Read a source file, describing the failure in user terms.
pub(crate) fn try_read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match try_read_file(path) {
        Ok(content) => content,
        Err(msg) => fail(&msg),
    }
}

/// Print `msg` as an error and exit with status 1.
pub(crate) fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}
