//! Scan errors.
//!
//! Every failure carries a [`ScanErrorKind`] for programmatic matching and,
//! once it has been attached to a position with [`ScanError::located`], the
//! file name and the original (pre-normalization) source line it came from.
//! Messages are produced by the `#[cold]` factory functions at the bottom of
//! this module so call sites stay one-liners.

use std::fmt;

use thiserror::Error;

use crate::{Cursor, DelimiterPair};

/// Result of a scan operation.
pub type ScanResult<T> = Result<T, ScanError>;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("unmatched quotes in [{context}]")]
    UnterminatedQuote { context: String },

    #[error("reached the end of input looking for `{close}` to match `{open}`")]
    UnbalancedDelimiter { open: char, close: char },

    #[error("malformed index in [{name}]")]
    MalformedIndex { name: String },

    #[error("unknown index [{index}] for tuple of size {size}")]
    IndexOutOfRange { index: String, size: usize },

    #[error("cannot apply index [{index}] to a value that is not a tuple")]
    NotATuple { index: String },

    #[error("couldn't extract function signature")]
    MissingSignature,

    #[error("maximum nesting depth exceeded (limit: {limit})")]
    NestingTooDeep { limit: u32 },

    #[error("incomplete arguments for [{name}]")]
    IncompleteArguments { name: String },

    #[error("unexpected `{found}` in argument list")]
    UnexpectedCharacter { found: char },

    #[error("expecting {expected} arguments but got {got} in {name}")]
    ArgumentCount {
        expected: usize,
        got: usize,
        name: String,
    },

    #[error("expected a number instead of [{found}]")]
    ExpectedNumber { found: String },

    #[error("expected an integer instead of [{found}]")]
    ExpectedInteger { found: String },

    #[error("expected a positive integer instead of [{found}]")]
    ExpectedPositive { found: String },

    #[error("expected a non-negative integer instead of [{found}]")]
    ExpectedNonNegative { found: String },

    #[error("expected a list argument")]
    ExpectedList,

    #[error("variable or function [{name}] doesn't exist")]
    UndefinedName { name: String },

    #[error("{message}")]
    Custom { message: String },
}

/// One line of the original source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: u32,
    /// The line's text, trimmed.
    pub text: String,
}

/// Where an error happened, as far as it could be recovered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<SourceLine>,
}

impl Location {
    /// Whether the location names a file or a line.
    pub fn is_known(&self) -> bool {
        self.filename.is_some() || self.line.is_some()
    }
}

/// A scan error with optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub location: Option<Location>,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind) -> Self {
        ScanError {
            kind,
            location: None,
        }
    }

    /// Attach the cursor's file name and original line.
    ///
    /// The first known location wins: an error re-thrown through outer scans
    /// keeps the position where it was raised. A location with neither file
    /// nor line (raised on a transient buffer) is replaced.
    #[must_use]
    pub fn located(mut self, cursor: &Cursor<'_>) -> Self {
        if !self.location.as_ref().is_some_and(Location::is_known) {
            self.location = Some(Location {
                filename: cursor.buffer().filename().map(str::to_owned),
                line: cursor.original_line(),
            });
        }
        self
    }

    /// The message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        ScanError::new(kind)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        let Some(location) = &self.location else {
            return Ok(());
        };
        match (&location.filename, &location.line) {
            (Some(file), Some(line)) => {
                write!(f, "\n  --> {file}:{}: {}", line.number, line.text)
            }
            (Some(file), None) => write!(f, "\n  --> {file}"),
            (None, Some(line)) => write!(f, "\n  --> line {}: {}", line.number, line.text),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

// Factories

#[cold]
pub fn unterminated_quote(context: &str) -> ScanError {
    ScanErrorKind::UnterminatedQuote {
        context: context.to_owned(),
    }
    .into()
}

#[cold]
pub fn unbalanced_delimiter(pair: DelimiterPair) -> ScanError {
    ScanErrorKind::UnbalancedDelimiter {
        open: char::from(pair.open()),
        close: char::from(pair.close()),
    }
    .into()
}

#[cold]
pub fn malformed_index(name: &str) -> ScanError {
    ScanErrorKind::MalformedIndex {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn index_out_of_range(index: String, size: usize) -> ScanError {
    ScanErrorKind::IndexOutOfRange { index, size }.into()
}

#[cold]
pub fn not_a_tuple(index: String) -> ScanError {
    ScanErrorKind::NotATuple { index }.into()
}

#[cold]
pub fn missing_signature() -> ScanError {
    ScanErrorKind::MissingSignature.into()
}

#[cold]
pub fn nesting_too_deep(limit: u32) -> ScanError {
    ScanErrorKind::NestingTooDeep { limit }.into()
}

#[cold]
pub fn incomplete_arguments(name: &str) -> ScanError {
    ScanErrorKind::IncompleteArguments {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn unexpected_character(found: char) -> ScanError {
    ScanErrorKind::UnexpectedCharacter { found }.into()
}

#[cold]
pub fn argument_count(expected: usize, got: usize, name: &str) -> ScanError {
    ScanErrorKind::ArgumentCount {
        expected,
        got,
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn expected_number(found: String) -> ScanError {
    ScanErrorKind::ExpectedNumber { found }.into()
}

#[cold]
pub fn expected_integer(found: String) -> ScanError {
    ScanErrorKind::ExpectedInteger { found }.into()
}

#[cold]
pub fn expected_positive(found: String) -> ScanError {
    ScanErrorKind::ExpectedPositive { found }.into()
}

#[cold]
pub fn expected_non_negative(found: String) -> ScanError {
    ScanErrorKind::ExpectedNonNegative { found }.into()
}

#[cold]
pub fn expected_list() -> ScanError {
    ScanErrorKind::ExpectedList.into()
}

#[cold]
pub fn undefined_name(name: &str) -> ScanError {
    ScanErrorKind::UndefinedName {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn custom(message: impl Into<String>) -> ScanError {
    ScanErrorKind::Custom {
        message: message.into(),
    }
    .into()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
