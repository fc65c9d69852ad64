//! The seam between scanning and evaluation.

use std::fmt;

use crate::{Cursor, ScanResult, TerminatorSet};

/// What the scanner needs to know about a runtime value.
pub trait ScriptValue: Clone + fmt::Debug {
    /// Build a tuple from its elements.
    fn from_tuple(items: Vec<Self>) -> Self;

    /// Elements, if this value is a tuple.
    fn as_tuple(&self) -> Option<&[Self]>;

    fn is_tuple(&self) -> bool {
        self.as_tuple().is_some()
    }

    fn as_number(&self) -> Option<f64>;

    /// Display form, used for error messages and string contexts.
    fn as_string(&self) -> String;

    /// Position in a tuple that `index` selects; negative when it selects
    /// nothing. Numbers are truncated toward zero.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "saturating float-to-int conversion is the intended truncation"
    )]
    fn array_index(&self, index: &Self) -> i64 {
        match index.as_number() {
            Some(n) if n.is_finite() => n.trunc() as i64,
            _ => -1,
        }
    }
}

/// Computes the value of an expression starting at a cursor.
///
/// Implementations advance the cursor past the expression and stop at the
/// first top-level character in `terminators` without consuming it.
pub trait Evaluator {
    type Value: ScriptValue;

    fn evaluate(
        &self,
        cursor: &mut Cursor<'_>,
        terminators: TerminatorSet,
    ) -> ScanResult<Self::Value>;

    /// Evaluate up to a single terminator character.
    fn evaluate_to(&self, cursor: &mut Cursor<'_>, terminator: u8) -> ScanResult<Self::Value> {
        self.evaluate(cursor, TerminatorSet::single(terminator))
    }

    /// Value of a variable, if one by that name exists.
    fn lookup(&self, _name: &str) -> Option<Self::Value> {
        None
    }
}
