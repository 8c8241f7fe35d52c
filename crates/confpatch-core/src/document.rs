//! Document parsing and canonical serialization.
//!
//! The document tree is a plain `serde_json::Value`. With the workspace's
//! `preserve_order` feature, objects keep their keys in source order, and the
//! default number model keeps integers (`i64`/`u64`) apart from fractions
//! (`f64`), so `3` never comes back as `3.0`.
//!
//! The canonical form is `serde_json`'s pretty printer: two-space indentation,
//! one member per line, non-ASCII text written as-is, no trailing newline.

use crate::error::{PatchError, Result};
use serde::de::IgnoredAny;
use serde_json::Value;

/// Parse document text into a value tree.
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Render a value tree in canonical form.
pub fn serialize(root: &Value) -> Result<String> {
    serde_json::to_string_pretty(root).map_err(PatchError::Serialize)
}

/// Parse and re-serialize a document without changing it.
///
/// # Examples
///
/// ```
/// use confpatch_core::canonicalize;
///
/// let out = canonicalize(r#"{"name":"Zoë","ports":[80,443]}"#).unwrap();
/// assert_eq!(out, "{\n  \"name\": \"Zoë\",\n  \"ports\": [\n    80,\n    443\n  ]\n}");
/// ```
pub fn canonicalize(text: &str) -> Result<String> {
    serialize(&parse_document(text)?)
}

/// Check that `text` is well-formed JSON without building a tree.
pub fn validate(text: &str) -> Result<()> {
    serde_json::from_str::<IgnoredAny>(text)?;
    Ok(())
}

/// Short lowercase name of a value's kind, as used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
