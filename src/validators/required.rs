//! Required field validator

use crate::traits::Validator;
use serde_json::Value;

/// Rule that is satisfied when a value is present and not empty.
///
/// Null, empty or whitespace-only strings, empty arrays and empty objects
/// are all unsatisfied. Numbers and booleans are always present, including
/// `0` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn is_satisfied(&self, value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(obj) => !obj.is_empty(),
            _ => true,
        }
    }

    fn default_message(&self) -> String {
        "Required".to_string()
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_with_null() {
        assert!(!Required.is_satisfied(&Value::Null));
    }

    #[test]
    fn test_required_with_empty_string() {
        assert!(!Required.is_satisfied(&Value::String("".to_string())));
    }

    #[test]
    fn test_required_with_whitespace_string() {
        assert!(!Required.is_satisfied(&Value::String("   ".to_string())));
    }

    #[test]
    fn test_required_with_valid_string() {
        assert!(Required.is_satisfied(&Value::String("John".to_string())));
    }

    #[test]
    fn test_required_with_arrays() {
        assert!(!Required.is_satisfied(&Value::Array(vec![])));
        assert!(Required.is_satisfied(&Value::Array(vec![Value::String("tag1".to_string())])));
    }

    #[test]
    fn test_required_with_numbers() {
        // Numbers are never considered empty (including 0)
        assert!(Required.is_satisfied(&Value::Number(serde_json::Number::from(0))));
        assert!(Required.is_satisfied(&Value::Number(serde_json::Number::from(42))));
    }

    #[test]
    fn test_required_with_boolean() {
        // Booleans are never considered empty (including false)
        assert!(Required.is_satisfied(&Value::Bool(false)));
        assert!(Required.is_satisfied(&Value::Bool(true)));
    }

    #[test]
    fn test_required_default_message() {
        assert_eq!(Required.default_message(), "Required");
    }
}
