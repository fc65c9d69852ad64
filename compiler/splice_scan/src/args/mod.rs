//! Argument lists, list literals and single items.
//!
//! [`parse_argument_list`] and [`parse_item`] recurse into each other for
//! nested list literals and into the evaluator for everything else. Every
//! list level costs one unit of the cursor's depth budget.

use tracing::trace;

use crate::delimiters::{
    END_ARG, END_STATEMENT, ITEM_TERMINATORS, NEXT_ARG, QUOTE, SPACE, START_ARG, START_GROUP,
};
use crate::error::{
    expected_list, incomplete_arguments, missing_signature, unexpected_character,
};
use crate::{matched_body, scan_token, Cursor, DelimiterPair, Evaluator, ScanResult, ScriptValue};

/// Items of one delimited list.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentList<V> {
    pub items: Vec<V>,
    /// The list was written as a `{...}` literal.
    pub is_list_literal: bool,
}

impl<V> ArgumentList<V> {
    fn empty(is_list_literal: bool) -> Self {
        ArgumentList {
            items: Vec::new(),
            is_list_literal,
        }
    }
}

/// Parse the items of a list whose opener has already been consumed.
///
/// Evaluates each item in order up to the matching `pair.close()`, consumes
/// the close and any spaces after it. An exhausted cursor or a `;` yields an
/// empty list.
#[tracing::instrument(level = "trace", skip_all, fields(pos = cursor.pos()))]
pub fn parse_argument_list<E>(
    cursor: &mut Cursor<'_>,
    pair: DelimiterPair,
    evaluator: &E,
) -> ScanResult<ArgumentList<E::Value>>
where
    E: Evaluator + ?Sized,
{
    let is_list_literal = cursor.still_valid() && cursor.current() == START_GROUP;
    if cursor.is_eof() || cursor.current() == END_STATEMENT {
        return Ok(ArgumentList::empty(is_list_literal));
    }

    let mut shadow = *cursor;
    matched_body(&mut shadow, pair)?;
    let bound = shadow.pos();
    trace!(bound, "argument list bound");

    let items = cursor.nested(|cursor| {
        let mut items = Vec::new();
        while cursor.pos() < bound {
            let before = cursor.pos();
            items.push(parse_item(cursor, evaluator)?);
            cursor.move_forward_if(NEXT_ARG);
            if cursor.pos() == before {
                let found = char::from(cursor.current());
                return Err(unexpected_character(found).located(cursor));
            }
        }
        Ok(items)
    })?;

    if cursor.pos() <= bound {
        cursor.move_forward_if(pair.close());
    }
    cursor.eat_spaces();
    Ok(ArgumentList {
        items,
        is_list_literal,
    })
}

/// Parse one item of an argument list.
///
/// A `{...}` literal becomes a tuple of its items; anything else is handed
/// to the evaluator, which stops at the next item terminator.
///
/// # Errors
///
/// [`IncompleteArguments`](crate::ScanErrorKind::IncompleteArguments) when
/// the input ends where an item should start.
pub fn parse_item<E>(cursor: &mut Cursor<'_>, evaluator: &E) -> ScanResult<E::Value>
where
    E: Evaluator + ?Sized,
{
    cursor.move_forward_if_any(&[NEXT_ARG, SPACE]);
    if cursor.is_eof() {
        let context = cursor.excerpt(cursor.pos().saturating_sub(20), 20);
        return Err(incomplete_arguments(context).located(cursor));
    }

    if cursor.current() == START_GROUP {
        cursor.advance();
        let list = parse_argument_list(cursor, DelimiterPair::BRACES, evaluator)?;
        return Ok(E::Value::from_tuple(list.items));
    }

    let in_quotes = cursor.current() == QUOTE;
    let value = evaluator.evaluate(cursor, ITEM_TERMINATORS)?;
    if in_quotes {
        cursor.move_forward_if(QUOTE);
    }
    cursor.move_forward_if_any(&[NEXT_ARG, SPACE]);
    Ok(value)
}

/// Parenthesized arguments in their string form.
pub fn function_args<E>(cursor: &mut Cursor<'_>, evaluator: &E) -> ScanResult<Vec<String>>
where
    E: Evaluator + ?Sized,
{
    cursor.move_forward_if(START_ARG);
    let list = parse_argument_list(cursor, DelimiterPair::PARENS, evaluator)?;
    Ok(list.items.iter().map(ScriptValue::as_string).collect())
}

/// Parameter names of a function definition, `(a, b, c)`.
///
/// Splits on every comma up to the first `)`, so parameters cannot contain
/// parentheses or commas of their own. The cursor ends past the `)`.
///
/// # Errors
///
/// [`MissingSignature`](crate::ScanErrorKind::MissingSignature) when no `)`
/// follows.
pub fn function_signature(cursor: &mut Cursor<'_>) -> ScanResult<Vec<String>> {
    cursor.move_forward_if_any(&[START_ARG, SPACE]);
    let Some(end) = cursor.find(END_ARG, cursor.pos()) else {
        return Err(missing_signature().located(cursor));
    };

    let params = cursor.slice(cursor.pos(), end);
    cursor.set_pos(end + 1);
    if params.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(params.split(',').map(|p| p.trim().to_owned()).collect())
}

/// A single list item rendered one element per line.
///
/// # Errors
///
/// [`ExpectedList`](crate::ScanErrorKind::ExpectedList) when the item is
/// not a tuple.
pub fn lines_from_list<E>(cursor: &mut Cursor<'_>, evaluator: &E) -> ScanResult<String>
where
    E: Evaluator + ?Sized,
{
    let item = parse_item(cursor, evaluator)?;
    let Some(lines) = item.as_tuple() else {
        return Err(expected_list().located(cursor));
    };

    let mut out = String::with_capacity(lines.len() * 80);
    for line in lines {
        out.push_str(&line.as_string());
        out.push('\n');
    }
    Ok(out)
}

/// A string constant, or the value of the variable it names.
///
/// A quoted token is always a constant. A bare token naming a variable the
/// evaluator knows becomes that variable's string form; any other bare
/// token is taken literally.
pub fn string_or_variable<E>(cursor: &mut Cursor<'_>, evaluator: &E) -> ScanResult<String>
where
    E: Evaluator + ?Sized,
{
    cursor.move_forward_if(SPACE);
    let quoted = cursor.current() == QUOTE;
    let token = scan_token(cursor, ITEM_TERMINATORS)?;
    if quoted {
        return Ok(token);
    }
    Ok(match evaluator.lookup(&token) {
        Some(value) => value.as_string(),
        None => token,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
