//! Built-in functions.
//!
//! Most built-ins take their arguments evaluated, left to right. `first`
//! evaluates only its first argument and steps over the rest with the
//! scanner's skip primitives; `signature` reads parameter names without
//! evaluating anything; `join` reads its separator as a constant or a
//! variable name, never as an expression.

use splice_scan::args::{function_args, function_signature, lines_from_list, string_or_variable};
use splice_scan::checks::{
    check_arg_count, check_non_negative_int, check_not_empty, check_not_end, check_number,
    check_positive_int, safe_double, safe_int, safe_string, safe_value,
};
use splice_scan::delimiters::{END_ARG, NEXT_ARG, START_ARG};
use splice_scan::error::{argument_count, custom, expected_list, unbalanced_delimiter};
use splice_scan::{
    has_separator_ahead, parse_argument_list, parse_item, skip_expression, Cursor, DelimiterPair,
    ScanResult, ScriptValue,
};

use crate::{Interpreter, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Builtin {
    Size,
    Sum,
    Join,
    First,
    Lines,
    Signature,
    Concat,
    Repeat,
    Round,
    At,
}

/// Longest string `repeat` may build.
const MAX_REPEAT_LEN: usize = 1 << 24;

/// Most decimal places `round` honours.
const MAX_ROUND_DIGITS: i64 = 15;

impl Builtin {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "size" => Builtin::Size,
            "sum" => Builtin::Sum,
            "join" => Builtin::Join,
            "first" => Builtin::First,
            "lines" => Builtin::Lines,
            "signature" => Builtin::Signature,
            "concat" => Builtin::Concat,
            "repeat" => Builtin::Repeat,
            "round" => Builtin::Round,
            "at" => Builtin::At,
            _ => return None,
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Builtin::Size => "size",
            Builtin::Sum => "sum",
            Builtin::Join => "join",
            Builtin::First => "first",
            Builtin::Lines => "lines",
            Builtin::Signature => "signature",
            Builtin::Concat => "concat",
            Builtin::Repeat => "repeat",
            Builtin::Round => "round",
            Builtin::At => "at",
        }
    }

    /// Call with the cursor on the opening `(`; leaves it after the `)`.
    pub(crate) fn call(
        self,
        interpreter: &Interpreter,
        cursor: &mut Cursor<'_>,
    ) -> ScanResult<Value> {
        match self {
            Builtin::First => first(interpreter, cursor),
            Builtin::Signature => {
                let names = function_signature(cursor)?;
                for name in &names {
                    check_not_empty(cursor, name, self.name())?;
                }
                cursor.eat_spaces();
                Ok(Value::Tuple(names.into_iter().map(Value::Str).collect()))
            }
            Builtin::Join => join(interpreter, cursor),
            Builtin::Concat => {
                let parts = function_args(cursor, interpreter)?;
                Ok(Value::Str(parts.concat()))
            }
            Builtin::Lines => {
                cursor.move_forward_if(START_ARG);
                let text = lines_from_list(cursor, interpreter)?;
                close_call(cursor)?;
                Ok(Value::Str(text))
            }
            Builtin::Size => {
                let args = eager_args(interpreter, cursor)?;
                size(&args).map_err(|e| e.located(cursor))
            }
            Builtin::Sum => {
                let args = eager_args(interpreter, cursor)?;
                sum(&args).map_err(|e| e.located(cursor))
            }
            Builtin::Repeat => {
                let args = eager_args(interpreter, cursor)?;
                repeat(&args).map_err(|e| e.located(cursor))
            }
            Builtin::Round => {
                let args = eager_args(interpreter, cursor)?;
                round(&args).map_err(|e| e.located(cursor))
            }
            Builtin::At => {
                let args = eager_args(interpreter, cursor)?;
                at(&args).map_err(|e| e.located(cursor))
            }
        }
    }
}

fn eager_args(interpreter: &Interpreter, cursor: &mut Cursor<'_>) -> ScanResult<Vec<Value>> {
    cursor.move_forward_if(START_ARG);
    Ok(parse_argument_list(cursor, DelimiterPair::PARENS, interpreter)?.items)
}

#[allow(clippy::cast_precision_loss, reason = "sizes are far below 2^52")]
fn size(args: &[Value]) -> ScanResult<Value> {
    check_arg_count(args.len(), 1, Builtin::Size.name())?;
    Ok(Value::Number(args[0].size() as f64))
}

/// Sum of the arguments, or of the elements of a single tuple argument.
fn sum(args: &[Value]) -> ScanResult<Value> {
    let terms = match args {
        [Value::Tuple(items)] => items.as_slice(),
        _ => args,
    };
    let mut total = 0.0;
    for term in terms {
        total += check_number(term)?;
    }
    Ok(Value::Number(total))
}

/// `join(list, separator)`.
fn join(interpreter: &Interpreter, cursor: &mut Cursor<'_>) -> ScanResult<Value> {
    let name = Builtin::Join.name();
    cursor.move_forward_if(START_ARG);
    check_not_end(cursor, name)?;
    let list = parse_item(cursor, interpreter)?;

    cursor.eat_spaces();
    cursor.move_forward_if(NEXT_ARG);
    cursor.eat_spaces();
    if cursor.is_eof() || cursor.current() == END_ARG {
        return Err(argument_count(2, 1, name).located(cursor));
    }
    let separator = string_or_variable(cursor, interpreter)?;
    close_call(cursor)?;

    let items = list
        .as_tuple()
        .ok_or_else(|| expected_list().located(cursor))?;
    let parts: Vec<String> = items.iter().map(ScriptValue::as_string).collect();
    Ok(Value::Str(parts.join(&separator)))
}

/// `repeat(text, count)` with a positive `count`.
fn repeat(args: &[Value]) -> ScanResult<Value> {
    check_arg_count(args.len(), 2, Builtin::Repeat.name())?;
    let count = usize::try_from(check_positive_int(&args[1])?).unwrap_or(usize::MAX);
    let text = safe_string(args, 0, "");
    if text.len().saturating_mul(count) > MAX_REPEAT_LEN {
        return Err(custom(format!(
            "repeat result longer than {MAX_REPEAT_LEN} bytes"
        )));
    }
    Ok(Value::Str(text.repeat(count)))
}

/// `round(x)` or `round(x, digits)`.
fn round(args: &[Value]) -> ScanResult<Value> {
    check_arg_count(args.len(), 1, Builtin::Round.name())?;
    let x = safe_double(args, 0, 0.0)?;
    let digits = match args.get(1) {
        Some(digits) => check_non_negative_int(digits)?.min(MAX_ROUND_DIGITS),
        None => 0,
    };
    let factor = 10f64.powi(i32::try_from(digits).unwrap_or(0));
    Ok(Value::Number((x * factor).round() / factor))
}

/// `at(list, index)` or `at(list, index, fallback)`.
///
/// An index outside the list gives the fallback, or an empty value.
fn at(args: &[Value]) -> ScanResult<Value> {
    check_arg_count(args.len(), 2, Builtin::At.name())?;
    let items = args[0].as_tuple().ok_or_else(expected_list)?;
    let index = safe_int(args, 1, 0)?;
    let fallback = safe_value(args, 2, Value::Empty);
    Ok(usize::try_from(index)
        .ok()
        .and_then(|index| items.get(index))
        .cloned()
        .unwrap_or(fallback))
}

/// Evaluate the first argument and step over the rest unevaluated.
fn first(interpreter: &Interpreter, cursor: &mut Cursor<'_>) -> ScanResult<Value> {
    cursor.move_forward_if(START_ARG);
    if cursor.move_forward_if(END_ARG) {
        cursor.eat_spaces();
        return Ok(Value::Empty);
    }

    let value = parse_item(cursor, interpreter)?;
    while cursor.still_valid() && cursor.current() != END_ARG {
        let more = has_separator_ahead(cursor);
        skip_expression(cursor);
        if !more || !cursor.move_forward_if(NEXT_ARG) {
            break;
        }
    }
    close_call(cursor)?;
    Ok(value)
}

fn close_call(cursor: &mut Cursor<'_>) -> ScanResult<()> {
    if !cursor.move_forward_if(END_ARG) {
        return Err(unbalanced_delimiter(DelimiterPair::PARENS).located(cursor));
    }
    cursor.eat_spaces();
    Ok(())
}
