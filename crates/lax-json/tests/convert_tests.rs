use lax_json::{decode, Value};
use serde_json::json;

// ============================================================================
// Value -> serde_json::Value
// ============================================================================

#[test]
fn decoded_tree_converts_to_serde_json() {
    let doc = decode(r#"{"name":"Alice","scores":[95,87,92],"ratio":0.75,"gone":null}"#).unwrap();
    let converted: serde_json::Value = doc.into();
    assert_eq!(
        converted,
        json!({"name":"Alice","scores":[95,87,92],"ratio":0.75,"gone":null})
    );
}

#[test]
fn integer_and_float_convert_to_distinct_json_numbers() {
    let converted: serde_json::Value = decode(r#"{"i":12,"f":12.5}"#).unwrap().into();
    assert!(converted["i"].is_i64());
    assert!(converted["f"].is_f64());
}

#[test]
fn non_finite_float_converts_to_null() {
    let converted: serde_json::Value = Value::Float(f64::NAN).into();
    assert_eq!(converted, serde_json::Value::Null);
    let converted: serde_json::Value = Value::Float(f64::INFINITY).into();
    assert_eq!(converted, serde_json::Value::Null);
}

// ============================================================================
// serde_json::Value -> Value
// ============================================================================

#[test]
fn serde_json_tree_converts_to_value() {
    let source = json!({"a":[1,2.5,"x",true,null]});
    let value: Value = source.into();
    assert_eq!(
        value.get("a").and_then(Value::as_array),
        Some(
            &[
                Value::Integer(1),
                Value::Float(2.5),
                Value::String("x".to_string()),
                Value::Bool(true),
                Value::Null,
            ][..]
        )
    );
}

#[test]
fn json_number_outside_i64_range_becomes_float() {
    let source = json!(u64::MAX);
    let value: Value = source.into();
    assert_eq!(value, Value::Float(u64::MAX as f64));
}

// ============================================================================
// serde impls
// ============================================================================

#[test]
fn value_serializes_through_serde_json() {
    // Re-serialization is delegated to serde_json; member order is not
    // guaranteed, so compare the re-parsed form.
    let doc = decode(r#"{"a":1,"b":[true,null],"c":"x"}"#).unwrap();
    let text = serde_json::to_string(&doc).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, json!({"a":1,"b":[true,null],"c":"x"}));
}

#[test]
fn value_deserializes_through_serde_json() {
    let value: Value = serde_json::from_str(r#"{"a":1,"f":2.5}"#).unwrap();
    assert_eq!(value.get("a"), Some(&Value::Integer(1)));
    assert_eq!(value.get("f"), Some(&Value::Float(2.5)));
}

// ============================================================================
// Construction helpers
// ============================================================================

#[test]
fn from_impls_build_expected_variants() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3i64), Value::Integer(3));
    assert_eq!(Value::from(3.5f64), Value::Float(3.5));
    assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    assert_eq!(Value::from(String::from("hi")), Value::String("hi".to_string()));
}
