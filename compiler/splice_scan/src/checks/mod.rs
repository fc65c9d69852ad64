//! Argument validation for built-in functions.
//!
//! Each check returns the validated projection of the value, so a built-in
//! reads `let n = check_positive_int(&args[0])?;` and continues with `n`.

use crate::error::{
    argument_count, expected_integer, expected_non_negative, expected_number, expected_positive,
    incomplete_arguments,
};
use crate::{Cursor, ScanResult, ScriptValue};

/// Fail unless at least `expected` arguments were passed to `name`.
pub fn check_arg_count(got: usize, expected: usize, name: &str) -> ScanResult<()> {
    if got < expected {
        return Err(argument_count(expected, got, name));
    }
    Ok(())
}

pub fn check_number<V: ScriptValue>(value: &V) -> ScanResult<f64> {
    value
        .as_number()
        .ok_or_else(|| expected_number(value.as_string()))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "value is checked to be integral and within i64 range"
)]
pub fn check_integer<V: ScriptValue>(value: &V) -> ScanResult<i64> {
    let n = check_number(value).map_err(|_| expected_integer(value.as_string()))?;
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    if n.fract() != 0.0 || !in_range {
        return Err(expected_integer(value.as_string()));
    }
    Ok(n as i64)
}

pub fn check_positive_int<V: ScriptValue>(value: &V) -> ScanResult<i64> {
    match check_integer(value) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(expected_positive(value.as_string())),
    }
}

pub fn check_non_negative_int<V: ScriptValue>(value: &V) -> ScanResult<i64> {
    match check_integer(value) {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(expected_non_negative(value.as_string())),
    }
}

/// Fail if the cursor is exhausted while `name` still expects arguments.
pub fn check_not_end(cursor: &Cursor<'_>, name: &str) -> ScanResult<()> {
    if cursor.is_eof() {
        return Err(incomplete_arguments(name).located(cursor));
    }
    Ok(())
}

/// Fail if `token` is empty where `name` needs an argument.
pub fn check_not_empty(cursor: &Cursor<'_>, token: &str, name: &str) -> ScanResult<()> {
    if token.is_empty() {
        return Err(incomplete_arguments(name).located(cursor));
    }
    Ok(())
}

/// Integer argument at `index`, or `default` when absent.
pub fn safe_int<V: ScriptValue>(args: &[V], index: usize, default: i64) -> ScanResult<i64> {
    args.get(index).map_or(Ok(default), check_integer)
}

/// Numeric argument at `index`, or `default` when absent.
pub fn safe_double<V: ScriptValue>(args: &[V], index: usize, default: f64) -> ScanResult<f64> {
    args.get(index).map_or(Ok(default), check_number)
}

/// String form of the argument at `index`, or `default` when absent.
pub fn safe_string<V: ScriptValue>(args: &[V], index: usize, default: &str) -> String {
    args.get(index)
        .map_or_else(|| default.to_owned(), ScriptValue::as_string)
}

/// Argument at `index`, or `default` when absent.
pub fn safe_value<V: ScriptValue>(args: &[V], index: usize, default: V) -> V {
    args.get(index).cloned().unwrap_or(default)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
