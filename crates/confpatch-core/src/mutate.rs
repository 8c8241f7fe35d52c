//! Applying a replacement value, and the full text-in/text-out pipeline.

use crate::coerce::coerce;
use crate::document::{parse_document, serialize, value_kind};
use crate::error::{PatchError, Result};
use crate::navigate::{resolve, type_mismatch, Target};
use crate::path::PathExpr;
use serde_json::Value;
use tracing::debug;

/// Store `value` at the target's final segment.
///
/// Existing object properties are replaced in place (keeping their position),
/// missing ones are added. Array elements can only be replaced: there is no
/// appending past the end and no removal. `Value::Null` is stored like any
/// other value.
///
/// # Errors
///
/// - indexed segment on an object parent: [`PatchError::PathNotFound`] if the
///   property is missing, [`PatchError::TypeMismatch`] if it is not an array,
///   [`PatchError::IndexOutOfRange`] if the index is past the end
/// - plain segment on an array parent: [`PatchError::InvalidPath`] if the name
///   is not an index, [`PatchError::IndexOutOfRange`] if it is past the end
/// - indexed segment on an array parent: [`PatchError::InvalidPath`]
pub fn apply(target: Target<'_, '_>, value: Value) -> Result<()> {
    let Target { parent, last, path } = target;
    let position = path.last_position();

    match (parent, last.index) {
        (Value::Object(map), Some(index)) => {
            let Some(child) = map.get_mut(last.name.as_str()) else {
                return Err(PatchError::PathNotFound {
                    path: path.as_str().to_string(),
                    segment: position,
                    name: last.name.clone(),
                });
            };
            let found = value_kind(child);
            let Value::Array(items) = child else {
                return Err(type_mismatch(path, position, "array", found));
            };
            replace_element(items, index, value, path)
        }
        (Value::Object(map), None) => {
            map.insert(last.name.clone(), value);
            Ok(())
        }
        (Value::Array(items), None) => {
            let index = last.name.parse::<usize>().map_err(|_| PatchError::InvalidPath {
                path: path.as_str().to_string(),
                segment: Some(position),
                reason: format!("'{}' is not an array index", last.name),
            })?;
            replace_element(items, index, value, path)
        }
        (parent, _) => Err(PatchError::InvalidPath {
            path: path.as_str().to_string(),
            segment: Some(position),
            reason: format!("cannot apply '{}' to {}", last, value_kind(parent)),
        }),
    }
}

fn replace_element(items: &mut [Value], index: usize, value: Value, path: &PathExpr) -> Result<()> {
    let len = items.len();
    let slot = items
        .get_mut(index)
        .ok_or_else(|| PatchError::IndexOutOfRange {
            path: path.as_str().to_string(),
            segment: path.last_position(),
            index,
            len,
        })?;
    *slot = value;
    Ok(())
}

/// Set the value at `path` in `document` and return the whole document in
/// canonical form.
///
/// `raw_value` is interpreted by [`coerce`]. The call is all-or-nothing: on
/// error no text is produced, so a caller that only persists `Ok` output never
/// writes a half-applied change.
///
/// # Errors
///
/// [`PatchError::Parse`] for a malformed document (checked before the path),
/// [`PatchError::InvalidPath`] for malformed path text, and the navigation and
/// mutation errors described on [`resolve`] and [`apply`].
///
/// # Examples
///
/// ```
/// use confpatch_core::mutate_document;
///
/// let out = mutate_document(r#"{"a":{"b":[1,2,3]}}"#, "a.b[1]", "9").unwrap();
/// let value: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(value, serde_json::json!({"a": {"b": [1, 9, 3]}}));
/// ```
pub fn mutate_document(document: &str, path: &str, raw_value: &str) -> Result<String> {
    let mut root = parse_document(document)?;
    let path = PathExpr::parse(path)?;

    let target = resolve(&mut root, &path)?;
    debug!(path = %path, parent = value_kind(target.parent), "resolved mutation target");

    let value = coerce(raw_value);
    debug!(kind = value_kind(&value), "coerced replacement value");

    apply(target, value)?;
    serialize(&root)
}
