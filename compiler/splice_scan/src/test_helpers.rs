//! Minimal evaluator for scanner tests.
//!
//! Numbers and bare words evaluate to themselves, quoted text to a string,
//! `(a, b)` to a tuple (or its only item) and `{...}` to a list. The name
//! `answer` resolves to 42 through [`Evaluator::lookup`].

use crate::delimiters::{QUOTE, START_ARG, START_GROUP};
use crate::{
    parse_argument_list, parse_item, scan_token, Cursor, DelimiterPair, Evaluator, ScanResult,
    ScriptValue, TerminatorSet,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TestValue {
    Num(f64),
    Str(String),
    Tuple(Vec<TestValue>),
}

impl TestValue {
    pub(crate) fn text(s: &str) -> Self {
        TestValue::Str(s.to_owned())
    }

    pub(crate) fn nums(values: &[f64]) -> Self {
        TestValue::Tuple(values.iter().copied().map(TestValue::Num).collect())
    }
}

impl ScriptValue for TestValue {
    fn from_tuple(items: Vec<Self>) -> Self {
        TestValue::Tuple(items)
    }

    fn as_tuple(&self) -> Option<&[Self]> {
        match self {
            TestValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            TestValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    fn as_string(&self) -> String {
        match self {
            TestValue::Num(n) => n.to_string(),
            TestValue::Str(s) => s.clone(),
            TestValue::Tuple(items) => {
                let parts: Vec<String> = items.iter().map(ScriptValue::as_string).collect();
                format!("({})", parts.join(", "))
            }
        }
    }
}

pub(crate) struct TestEvaluator;

impl Evaluator for TestEvaluator {
    type Value = TestValue;

    fn evaluate(
        &self,
        cursor: &mut Cursor<'_>,
        terminators: TerminatorSet,
    ) -> ScanResult<TestValue> {
        match cursor.current() {
            QUOTE => Ok(TestValue::Str(scan_token(cursor, terminators)?)),
            START_ARG => {
                cursor.advance();
                let mut list = parse_argument_list(cursor, DelimiterPair::PARENS, self)?;
                if list.items.len() == 1 {
                    Ok(list.items.remove(0))
                } else {
                    Ok(TestValue::Tuple(list.items))
                }
            }
            START_GROUP => parse_item(cursor, self),
            _ => {
                let start = cursor.pos();
                let end = cursor.find_first_of(terminators, start).unwrap_or(cursor.len());
                let text = cursor.slice(start, end);
                cursor.set_pos(end);
                Ok(text
                    .parse::<f64>()
                    .map_or_else(|_| TestValue::text(text), TestValue::Num))
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<TestValue> {
        (name == "answer").then_some(TestValue::Num(42.0))
    }
}
