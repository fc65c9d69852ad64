//! Splice Scan - lexical front end of the Splice scripting language.
//!
//! Splice scripts are not tokenized up front. The [`normalize`] pass turns a
//! source file into compact, comment-free text once; after that an
//! expression evaluator walks the text with a [`Cursor`] and calls back into
//! this crate whenever it needs to carve out a syntactic unit:
//!
//! - [`lexical`]: single tokens and expression boundaries
//! - [`matcher`]: the balanced body between a delimiter pair
//! - [`args`]: argument lists, list literals and single items
//! - [`index`]: `[expr][expr]` suffixes and their application to tuples
//! - [`beautify`]: re-indent compact text for humans
//!
//! # The Evaluator Seam
//!
//! Scanning and evaluation are mutually recursive: an argument list is split
//! into items here, each item is computed by the evaluator, and the evaluator
//! comes back here when the item contains a call or a list. The two sides
//! only know each other through the [`Evaluator`] and [`ScriptValue`] traits,
//! passed by reference down the call chain.
//!
//! # Nesting
//!
//! Each nested argument list costs one level of the depth budget configured
//! in [`ScanConfig`]. Running out fails with
//! [`ScanErrorKind::NestingTooDeep`] instead of overflowing the stack.

pub mod args;
pub mod beautify;
pub mod checks;
mod config;
mod cursor;
pub mod delimiters;
pub mod error;
mod evaluator;
pub mod index;
pub mod lexical;
mod line_map;
pub mod matcher;
pub mod normalize;
mod source_buffer;

#[cfg(test)]
mod test_helpers;

pub use args::{parse_argument_list, parse_item, ArgumentList};
pub use beautify::beautify;
pub use config::ScanConfig;
pub use cursor::Cursor;
pub use delimiters::{DelimiterPair, TerminatorSet};
pub use error::{Location, ScanError, ScanErrorKind, ScanResult, SourceLine};
pub use evaluator::{Evaluator, ScriptValue};
pub use index::{apply_indices, extract_indices, IndexChain};
pub use lexical::{has_separator_ahead, next_token, scan_token, skip_expression};
pub use line_map::LineMap;
pub use matcher::matched_body;
pub use normalize::{normalize, NormalizeOptions, Normalized};
pub use source_buffer::SourceBuffer;
