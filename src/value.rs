//! Capability helpers over the document value model
//!
//! The layout document is loosely typed: every node is a
//! [`serde_json::Value`] that may be a primitive, an object, or null.
//! Resolvers only ever query nodes through the helpers here.

use serde_json::Value;
use std::borrow::Cow;

/// Whether a document value is a primitive (string, boolean, or number).
pub fn is_primitive(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Bool(_) | Value::Number(_))
}

/// String coercion of a primitive document value. Booleans and numbers
/// render in their canonical textual form; non-primitives have none.
pub fn primitive_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

/// Best-effort boolean coercion of a document value.
///
/// A boolean primitive contributes its literal value and explicit null is
/// false; every other value coerces to true, numeric zero included.
pub fn parse_boolean(value: &Value) -> bool {
    // TODO: treat numeric 0 as false as well.
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive(&json!("text")));
        assert!(is_primitive(&json!(true)));
        assert!(is_primitive(&json!(12.5)));
        assert!(!is_primitive(&json!(null)));
        assert!(!is_primitive(&json!({})));
        assert!(!is_primitive(&json!([1, 2])));
    }

    #[test]
    fn test_primitive_string_coercion() {
        assert_eq!(primitive_string(&json!("wrap_content")).unwrap(), "wrap_content");
        assert_eq!(primitive_string(&json!(false)).unwrap(), "false");
        assert_eq!(primitive_string(&json!(16)).unwrap(), "16");
        assert!(primitive_string(&json!(null)).is_none());
        assert!(primitive_string(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_parse_boolean() {
        assert!(parse_boolean(&json!(true)));
        assert!(!parse_boolean(&json!(false)));
        assert!(!parse_boolean(&json!(null)));
        assert!(parse_boolean(&json!("yes")));
        assert!(parse_boolean(&json!("")));
        assert!(parse_boolean(&json!({"k": "v"})));
    }

    #[test]
    fn test_parse_boolean_zero_is_true() {
        // Known quirk, kept as-is: only boolean false and null are false.
        assert!(parse_boolean(&json!(0)));
        assert!(parse_boolean(&json!(0.0)));
    }
}
