//! Splice Eval - reference evaluator for the Splice scanner.
//!
//! Implements [`splice_scan::Evaluator`] with a small expression language:
//! numbers, strings, `{...}` lists, global variables, arithmetic,
//! comparisons, index suffixes and a handful of built-in functions. It exists
//! to drive the scanner end to end; the scanner itself knows nothing about it.
//!
//! ```text
//! let buffer = SourceBuffer::from_script("a = {1, 2}; sum(a) * 10;", None, ScanConfig::default());
//! let values = run(&buffer, &mut Interpreter::new())?;   // [30]
//! ```

mod builtins;
mod interpreter;
mod operators;
mod program;
mod value;

pub use interpreter::Interpreter;
pub use operators::{compare, evaluate_binary, BinaryOp, CompareOp};
pub use program::run;
pub use value::Value;
