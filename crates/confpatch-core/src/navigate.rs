//! Walk a document down to the container a path's final segment applies to.

use crate::document::value_kind;
use crate::error::{PatchError, Result};
use crate::path::{PathExpr, Segment};
use serde_json::Value;

/// The container located for a path, together with the segment still to be
/// applied to it.
///
/// `parent` is always an object or an array. It is a mutable borrow into the
/// caller's tree, so applying the final segment edits the tree in place.
#[derive(Debug)]
pub struct Target<'v, 'p> {
    pub parent: &'v mut Value,
    pub last: &'p Segment,
    pub path: &'p PathExpr,
}

/// Resolve every segment of `path` except the last, starting from `root`.
///
/// Traversal stops at the first segment that cannot be followed. Nothing is
/// created along the way: missing properties and short arrays are errors.
///
/// # Errors
///
/// - [`PatchError::PathNotFound`] if a segment names a missing property.
/// - [`PatchError::TypeMismatch`] if a segment meets a value of the wrong
///   kind, or the final parent is not a container.
/// - [`PatchError::IndexOutOfRange`] if a bracket index is past the end.
pub fn resolve<'v, 'p>(root: &'v mut Value, path: &'p PathExpr) -> Result<Target<'v, 'p>> {
    let last = path.last();
    let mut cursor = root;

    for (position, segment) in path.segments()[..path.last_position()].iter().enumerate() {
        cursor = descend(cursor, segment, position, path)?;
    }

    if !matches!(cursor, Value::Object(_) | Value::Array(_)) {
        return Err(type_mismatch(
            path,
            path.last_position(),
            "object or array",
            value_kind(cursor),
        ));
    }

    Ok(Target {
        parent: cursor,
        last,
        path,
    })
}

/// Follow a single intermediate segment.
fn descend<'v>(
    cursor: &'v mut Value,
    segment: &Segment,
    position: usize,
    path: &PathExpr,
) -> Result<&'v mut Value> {
    let found = value_kind(cursor);
    let Value::Object(map) = cursor else {
        return Err(type_mismatch(path, position, "object", found));
    };

    let child = map
        .get_mut(segment.name.as_str())
        .ok_or_else(|| PatchError::PathNotFound {
            path: path.as_str().to_string(),
            segment: position,
            name: segment.name.clone(),
        })?;

    let Some(index) = segment.index else {
        return Ok(child);
    };

    let found = value_kind(child);
    let Value::Array(items) = child else {
        return Err(type_mismatch(path, position, "array", found));
    };
    let len = items.len();
    items.get_mut(index).ok_or_else(|| PatchError::IndexOutOfRange {
        path: path.as_str().to_string(),
        segment: position,
        index,
        len,
    })
}

pub(crate) fn type_mismatch(
    path: &PathExpr,
    segment: usize,
    expected: &'static str,
    found: &'static str,
) -> PatchError {
    PatchError::TypeMismatch {
        path: path.as_str().to_string(),
        segment,
        expected,
        found,
    }
}
