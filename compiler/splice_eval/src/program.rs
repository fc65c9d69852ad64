//! Statement runner.

use splice_scan::delimiters::END_STATEMENT;
use splice_scan::error::unexpected_character;
use splice_scan::{next_token, Evaluator, ScanResult, SourceBuffer, TerminatorSet};
use tracing::debug;

use crate::{Interpreter, Value};

const STATEMENT_END: TerminatorSet = TerminatorSet::single(END_STATEMENT);

/// Run every statement in `buffer`.
///
/// Statements are separated by `;`. `name=expr` binds a global in
/// `interpreter`; any other statement is evaluated and its value collected.
/// Errors carry the file and original line of the failing statement.
pub fn run(buffer: &SourceBuffer, interpreter: &mut Interpreter) -> ScanResult<Vec<Value>> {
    let mut results = Vec::new();
    let mut cursor = buffer.cursor();
    while cursor.still_valid() {
        cursor.eat_spaces();
        if cursor.is_eof() || cursor.move_forward_if(END_STATEMENT) {
            continue;
        }

        let mut lookahead = cursor;
        let name = next_token(&mut lookahead);
        let assigns =
            is_identifier(name) && lookahead.current() == b'=' && lookahead.peek() != b'=';
        if assigns {
            lookahead.advance();
            let value = interpreter
                .evaluate(&mut lookahead, STATEMENT_END)
                .map_err(|e| e.located(&lookahead))?;
            debug!(name, kind = value.type_name(), %value, "assign");
            interpreter.define(name, value);
            cursor = lookahead;
        } else {
            let value = interpreter
                .evaluate(&mut cursor, STATEMENT_END)
                .map_err(|e| e.located(&cursor))?;
            results.push(value);
        }

        if cursor.still_valid() && !cursor.move_forward_if(END_STATEMENT) {
            let found = char::from(cursor.current());
            return Err(unexpected_character(found).located(&cursor));
        }
    }
    Ok(results)
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
