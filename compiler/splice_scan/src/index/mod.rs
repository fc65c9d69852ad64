//! Index suffixes: `name[expr][expr]...`.

use smallvec::SmallVec;

use crate::delimiters::{END_ARRAY, START_ARRAY};
use crate::error::{index_out_of_range, malformed_index, not_a_tuple};
use crate::{Cursor, Evaluator, ScanResult, ScriptValue, SourceBuffer};

/// Evaluated index suffix of a name.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexChain<'n, V> {
    /// One value per `[...]` group, left to right.
    pub indices: SmallVec<[V; 2]>,
    /// The name without its suffix.
    pub stripped_name: &'n str,
    /// Offset in the name just past the last `]`; 0 without a suffix.
    pub end: usize,
}

impl<V> IndexChain<'_, V> {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Split `name` into its base and evaluated index groups.
///
/// Each group is evaluated with the evaluator on a cursor over `name` and
/// must end exactly on its `]`, so indices may themselves contain indexed
/// names. That cursor shares the configuration of `parent` and starts at its
/// depth; every group costs one more level.
///
/// # Errors
///
/// [`MalformedIndex`](crate::ScanErrorKind::MalformedIndex) for a group
/// without a closing `]` or with nothing inside,
/// [`NestingTooDeep`](crate::ScanErrorKind::NestingTooDeep) once the depth
/// budget is spent; evaluation errors are passed through.
#[tracing::instrument(level = "trace", skip(parent, evaluator))]
pub fn extract_indices<'n, E>(
    parent: &Cursor<'_>,
    name: &'n str,
    evaluator: &E,
) -> ScanResult<IndexChain<'n, E::Value>>
where
    E: Evaluator + ?Sized,
{
    let Some(first) = memchr::memchr(START_ARRAY, name.as_bytes()) else {
        return Ok(IndexChain {
            indices: SmallVec::new(),
            stripped_name: name,
            end: 0,
        });
    };

    let buffer = SourceBuffer::with_config(name, parent.buffer().config().clone());
    let mut cursor = buffer
        .cursor_at(u32::try_from(first).unwrap_or(u32::MAX))
        .at_depth(parent.depth());

    let mut indices = SmallVec::new();
    while cursor.current() == START_ARRAY {
        let open = cursor.pos();
        match cursor.find(END_ARRAY, open + 1) {
            Some(close) if close > open + 1 => {}
            _ => return Err(malformed_index(name)),
        }

        cursor.advance();
        let index = cursor.nested(|cursor| evaluator.evaluate_to(cursor, END_ARRAY))?;
        if cursor.current() != END_ARRAY {
            return Err(malformed_index(name));
        }
        cursor.advance();
        indices.push(index);
    }

    Ok(IndexChain {
        indices,
        stripped_name: &name[..first],
        end: cursor.pos() as usize,
    })
}

/// Descend into `root` one level per index.
///
/// # Errors
///
/// [`NotATuple`](crate::ScanErrorKind::NotATuple) when a level is a scalar,
/// [`IndexOutOfRange`](crate::ScanErrorKind::IndexOutOfRange) when an index
/// selects no element of its level.
pub fn apply_indices<V: ScriptValue>(root: &V, indices: &[V]) -> ScanResult<V> {
    let mut level = root;
    for index in indices {
        let Some(items) = level.as_tuple() else {
            return Err(not_a_tuple(index.as_string()));
        };
        let slot = usize::try_from(level.array_index(index))
            .ok()
            .and_then(|position| items.get(position));
        let Some(child) = slot else {
            return Err(index_out_of_range(index.as_string(), items.len()));
        };
        level = child;
    }
    Ok(level.clone())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
