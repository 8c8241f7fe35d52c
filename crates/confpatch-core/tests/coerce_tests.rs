/// Value coercion tests. The rule order is fixed, so these tests pin both the
/// result and which rule produced it.
use confpatch_core::coerce;
use serde_json::{json, Value};

// ============================================================================
// Rule 1: valid JSON text
// ============================================================================

#[test]
fn json_object_fragment() {
    assert_eq!(coerce(r#"{"a":1}"#), json!({"a": 1}));
}

#[test]
fn json_object_keeps_key_order() {
    let value = coerce(r#"{"z":1,"a":2,"m":3}"#);
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn json_array_fragment() {
    assert_eq!(coerce("[1, \"two\", null]"), json!([1, "two", null]));
}

#[test]
fn json_quoted_string_is_unquoted() {
    assert_eq!(coerce(r#""hello""#), json!("hello"));
}

#[test]
fn json_quoted_number_stays_a_string() {
    assert_eq!(coerce(r#""42""#), json!("42"));
}

#[test]
fn json_quoted_string_escapes_are_decoded() {
    assert_eq!(coerce(r#""a\nb""#), json!("a\nb"));
}

#[test]
fn json_literals() {
    assert_eq!(coerce("true"), Value::Bool(true));
    assert_eq!(coerce("false"), Value::Bool(false));
    assert_eq!(coerce("null"), Value::Null);
}

#[test]
fn json_exponent_number() {
    let value = coerce("1e3");
    assert!(value.is_f64());
    assert_eq!(value.as_f64(), Some(1000.0));
}

#[test]
fn json_text_with_surrounding_whitespace() {
    assert_eq!(coerce("  42  "), json!(42));
    assert_eq!(coerce(" {\"a\": true} "), json!({"a": true}));
}

// ============================================================================
// Rules 2-3: case-insensitive literals
// ============================================================================

#[test]
fn bool_any_case() {
    assert_eq!(coerce("True"), Value::Bool(true));
    assert_eq!(coerce("TRUE"), Value::Bool(true));
    assert_eq!(coerce("False"), Value::Bool(false));
    assert_eq!(coerce("fALSE"), Value::Bool(false));
}

#[test]
fn null_any_case() {
    assert_eq!(coerce("NULL"), Value::Null);
    assert_eq!(coerce("Null"), Value::Null);
}

#[test]
fn literal_with_padding_is_a_string() {
    assert_eq!(coerce(" True "), json!(" True "));
}

// ============================================================================
// Rules 4-5: numbers outside JSON syntax
// ============================================================================

#[test]
fn integer_is_integral() {
    let value = coerce("42");
    assert!(value.is_i64());
    assert_eq!(value.as_i64(), Some(42));
}

#[test]
fn negative_integer() {
    assert_eq!(coerce("-17").as_i64(), Some(-17));
}

#[test]
fn plus_signed_integer() {
    let value = coerce("+5");
    assert!(value.is_i64());
    assert_eq!(value.as_i64(), Some(5));
}

#[test]
fn leading_zero_integer() {
    let value = coerce("007");
    assert!(value.is_i64());
    assert_eq!(value.as_i64(), Some(7));
}

#[test]
fn fraction_is_fractional() {
    let value = coerce("42.5");
    assert!(value.is_f64());
    assert_eq!(value.as_f64(), Some(42.5));
}

#[test]
fn float_forms_outside_json() {
    assert_eq!(coerce(".5").as_f64(), Some(0.5));
    assert_eq!(coerce("5.").as_f64(), Some(5.0));
    assert!(coerce("5.").is_f64());
    assert_eq!(coerce("+2.25").as_f64(), Some(2.25));
}

#[test]
fn integer_beyond_i64_becomes_float() {
    // Valid JSON up to u64::MAX; past that only the float rule matches.
    let value = coerce("+99999999999999999999");
    assert!(value.is_f64());
}

#[test]
fn non_finite_floats_are_strings() {
    assert_eq!(coerce("inf"), json!("inf"));
    assert_eq!(coerce("NaN"), json!("NaN"));
    assert_eq!(coerce("-infinity"), json!("-infinity"));
    assert_eq!(coerce("1e400"), json!("1e400"));
}

// ============================================================================
// Rule 6: fallback
// ============================================================================

#[test]
fn plain_word() {
    assert_eq!(coerce("hello"), json!("hello"));
}

#[test]
fn empty_text() {
    assert_eq!(coerce(""), json!(""));
}

#[test]
fn text_is_taken_verbatim() {
    assert_eq!(coerce(r"C:\temp\new"), json!(r"C:\temp\new"));
    assert_eq!(coerce("say \"hi\""), json!("say \"hi\""));
}

#[test]
fn malformed_json_falls_back_to_string() {
    assert_eq!(coerce("{a:1}"), json!("{a:1}"));
    assert_eq!(coerce("[1,"), json!("[1,"));
}

#[test]
fn unicode_text() {
    assert_eq!(coerce("日本語"), json!("日本語"));
}

#[test]
fn near_literals_are_strings() {
    assert_eq!(coerce("yes"), json!("yes"));
    assert_eq!(coerce("truee"), json!("truee"));
    assert_eq!(coerce("1.2.3"), json!("1.2.3"));
    assert_eq!(coerce("0x1F"), json!("0x1F"));
}
