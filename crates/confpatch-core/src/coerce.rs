//! Type inference for replacement values supplied as free text.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. valid JSON text (object, array, quoted string, number, `true`, `false`,
//!    `null`) → the parsed value, so structured fragments can be injected
//! 2. `true` / `false` in any letter case → boolean
//! 3. `null` in any letter case → null
//! 4. a base-10 integer that fits in `i64` → integer number
//! 5. a finite base-10 floating-point literal → fractional number
//! 6. anything else → the raw text as a string, unescaped
//!
//! The order is part of the tool's observable behaviour and must not change:
//! `true` always becomes a boolean, never the string `"true"`.

use serde_json::{Number, Value};

/// Convert `raw` into a typed value. Never fails.
///
/// # Examples
///
/// ```
/// use confpatch_core::coerce;
/// use serde_json::json;
///
/// assert_eq!(coerce("TRUE"), json!(true));
/// assert_eq!(coerce("8080"), json!(8080));
/// assert_eq!(coerce("[1, 2]"), json!([1, 2]));
/// assert_eq!(coerce("localhost"), json!("localhost"));
/// ```
pub fn coerce(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }

    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    // `f64::from_str` also accepts `inf` and `NaN`, which JSON cannot hold.
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }

    Value::String(raw.to_string())
}
