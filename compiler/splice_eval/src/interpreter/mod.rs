//! Expression evaluator over compact Splice text.
//!
//! The interpreter never builds a syntax tree. It reads the text through a
//! [`Cursor`], computing as it goes, and hands every list, argument and
//! index suffix to the scanner:
//!
//! ```text
//! logic  := compare (('&&' | '||') compare)*
//! compare:= sum [('<' | '<=' | '>' | '>=' | '==' | '!=') sum]
//! sum    := product (('+' | '-') product)*
//! product:= unary (('*' | '/' | '%') unary)*
//! unary  := '-' unary | '!' unary | atom
//! atom   := number | "string" | '(' items ')' | '{' items '}'
//!         | name ['(' args ')'] ['[' expr ']']*
//! ```
//!
//! Every way back into `unary` goes through [`Cursor::nested`]: a unary
//! sign, a call, an index group or an argument list each cost one level of
//! the depth budget.

use rustc_hash::FxHashMap;
use splice_scan::delimiters::{END_ARRAY, QUOTE, START_ARG, START_ARRAY, START_GROUP};
use splice_scan::error::{expected_number, undefined_name, unexpected_character};
use splice_scan::lexical::{is_and_or_sign, is_compare_sign, not_sign, starts_with_any};
use splice_scan::{
    apply_indices, extract_indices, matched_body, next_token, parse_argument_list, parse_item,
    scan_token, Cursor, DelimiterPair, Evaluator, ScanResult, TerminatorSet,
};
use tracing::trace;

use crate::builtins::Builtin;
use crate::operators::{compare, evaluate_binary, negate, BinaryOp, CompareOp, COMPARISON_SIGNS};
use crate::Value;

/// Evaluates Splice expressions against a set of global variables.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    globals: FxHashMap<String, Value>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    #[must_use]
    pub fn with_global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.define(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// `&&` and `||`, left to right; both sides are always evaluated.
    fn logic(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        let mut left = self.comparison(cursor, terminators)?;
        loop {
            cursor.eat_spaces();
            let sign = cursor.current();
            if !is_and_or_sign(sign) || cursor.peek() != sign {
                return Ok(left);
            }
            cursor.advance_n(2);
            let right = self.comparison(cursor, terminators)?;
            let holds = if sign == b'&' {
                left.is_truthy() && right.is_truthy()
            } else {
                left.is_truthy() || right.is_truthy()
            };
            left = Value::from(holds);
        }
    }

    fn comparison(
        &self,
        cursor: &mut Cursor<'_>,
        terminators: TerminatorSet,
    ) -> ScanResult<Value> {
        let left = self.sum(cursor, terminators)?;
        cursor.eat_spaces();
        let ch = cursor.current();
        if !is_compare_sign(ch) && ch != b'!' {
            return Ok(left);
        }
        let Some(sign) = starts_with_any(cursor.rest(), &COMPARISON_SIGNS) else {
            return Ok(left);
        };
        let Some(op) = CompareOp::from_sign(sign) else {
            return Ok(left);
        };
        for _ in sign.bytes() {
            cursor.advance();
        }
        let right = self.sum(cursor, terminators)?;
        Ok(compare(&left, &right, op))
    }

    fn sum(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        let mut left = self.product(cursor, terminators)?;
        loop {
            cursor.eat_spaces();
            let Some(op) = BinaryOp::additive(cursor.current()) else {
                return Ok(left);
            };
            cursor.advance();
            let right = self.product(cursor, terminators)?;
            left = evaluate_binary(left, right, op).map_err(|e| e.located(cursor))?;
        }
    }

    fn product(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        let mut left = self.unary(cursor, terminators)?;
        loop {
            cursor.eat_spaces();
            let Some(op) = BinaryOp::multiplicative(cursor.current()) else {
                return Ok(left);
            };
            cursor.advance();
            let right = self.unary(cursor, terminators)?;
            left = evaluate_binary(left, right, op).map_err(|e| e.located(cursor))?;
        }
    }

    fn unary(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        cursor.eat_spaces();
        if cursor.move_forward_if(b'-') {
            let operand = cursor.nested(|cursor| self.unary(cursor, terminators))?;
            return negate(&operand).map_err(|e| e.located(cursor));
        }
        if not_sign(cursor.rest()).is_some() {
            cursor.advance();
            let operand = cursor.nested(|cursor| self.unary(cursor, terminators))?;
            return Ok(Value::from(!operand.is_truthy()));
        }
        self.atom(cursor, terminators)
    }

    fn atom(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        let ch = cursor.current();
        if cursor.is_eof() || terminators.contains(ch) {
            return Ok(Value::Empty);
        }

        let value = match ch {
            QUOTE => Value::Str(scan_token(cursor, terminators)?),
            START_ARG => {
                cursor.advance();
                let mut list = parse_argument_list(cursor, DelimiterPair::PARENS, self)?;
                if list.items.len() == 1 {
                    list.items.swap_remove(0)
                } else {
                    Value::Tuple(list.items)
                }
            }
            START_GROUP => parse_item(cursor, self)?,
            b'0'..=b'9' | b'.' => number(cursor)?,
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => return self.name(cursor),
            _ => return Err(unexpected_character(char::from(ch)).located(cursor)),
        };
        self.index_suffix(cursor, value)
    }

    /// A variable, a call, and any index suffix after either.
    fn name(&self, cursor: &mut Cursor<'_>) -> ScanResult<Value> {
        let start = cursor.pos();
        let mut name = next_token(cursor);
        if name.is_empty() {
            name = cursor.rest();
            cursor.set_pos(cursor.len());
        }

        if cursor.current() == START_ARG {
            let Some(builtin) = Builtin::from_name(name) else {
                return Err(undefined_name(name).located(cursor));
            };
            trace!(name, "call");
            let value = cursor.nested(|cursor| builtin.call(self, cursor))?;
            return self.index_suffix(cursor, value);
        }

        if cursor.current() != START_ARRAY {
            return self
                .lookup(name)
                .ok_or_else(|| undefined_name(name).located(cursor));
        }

        skip_brackets(cursor)?;
        let indexed = cursor.slice(start, cursor.pos());
        let chain = extract_indices(cursor, indexed, self).map_err(|e| e.located(cursor))?;
        let root = self
            .lookup(chain.stripped_name)
            .ok_or_else(|| undefined_name(chain.stripped_name).located(cursor))?;
        apply_indices(&root, &chain.indices).map_err(|e| e.located(cursor))
    }

    fn index_suffix(&self, cursor: &mut Cursor<'_>, value: Value) -> ScanResult<Value> {
        if cursor.current() != START_ARRAY {
            return Ok(value);
        }
        let start = cursor.pos();
        skip_brackets(cursor)?;
        let suffix = cursor.slice(start, cursor.pos());
        let chain = extract_indices(cursor, suffix, self).map_err(|e| e.located(cursor))?;
        apply_indices(&value, &chain.indices).map_err(|e| e.located(cursor))
    }
}

impl Evaluator for Interpreter {
    type Value = Value;

    fn evaluate(&self, cursor: &mut Cursor<'_>, terminators: TerminatorSet) -> ScanResult<Value> {
        let value = self.logic(cursor, terminators)?;
        cursor.eat_spaces();
        if cursor.still_valid() && !terminators.contains(cursor.current()) {
            let found = char::from(cursor.current());
            return Err(unexpected_character(found).located(cursor));
        }
        Ok(value)
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }
}

/// Step over a run of `[...]` groups.
fn skip_brackets(cursor: &mut Cursor<'_>) -> ScanResult<()> {
    while cursor.current() == START_ARRAY {
        cursor.advance();
        matched_body(cursor, DelimiterPair::BRACKETS)?;
        cursor.move_forward_if(END_ARRAY);
    }
    Ok(())
}

fn number(cursor: &mut Cursor<'_>) -> ScanResult<Value> {
    let start = cursor.pos();
    while matches!(cursor.current(), b'0'..=b'9' | b'.') {
        cursor.advance();
    }
    let text = cursor.slice_from(start);
    text.parse::<f64>()
        .map(Value::Number)
        .map_err(|_| expected_number(text.to_owned()).located(cursor))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
