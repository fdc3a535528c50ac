//! Size and length validators for strings and collections

use crate::traits::Validator;
use serde_json::Value;

/// Size of a value: character count for strings (Unicode-aware), element
/// count for arrays. Other shapes have no size and fail the bound.
fn size_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(arr) => Some(arr.len()),
        _ => None,
    }
}

/// Rule satisfied when a string or array holds at least `min` elements.
#[derive(Debug, Clone, Copy)]
pub struct MinSize {
    pub min: usize,
}

impl MinSize {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinSize {
    fn is_satisfied(&self, value: &Value) -> bool {
        match size_of(value) {
            Some(len) => len >= self.min,
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Minimum size is {}", self.min)
    }

    fn rule_name(&self) -> &'static str {
        "min_size"
    }
}

/// Rule satisfied when a string or array holds at most `max` elements.
#[derive(Debug, Clone, Copy)]
pub struct MaxSize {
    pub max: usize,
}

impl MaxSize {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validator for MaxSize {
    fn is_satisfied(&self, value: &Value) -> bool {
        match size_of(value) {
            Some(len) => len <= self.max,
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Maximum size is {}", self.max)
    }

    fn rule_name(&self) -> &'static str {
        "max_size"
    }
}

/// Rule satisfied when a string or array holds exactly `length` elements.
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub length: usize,
}

impl Length {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Validator for Length {
    fn is_satisfied(&self, value: &Value) -> bool {
        match size_of(value) {
            Some(len) => len == self.length,
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Required length is {}", self.length)
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn test_min_size_with_strings() {
        let rule = MinSize::new(3);
        assert!(!rule.is_satisfied(&s("hi")));
        assert!(rule.is_satisfied(&s("bob")));
        assert!(rule.is_satisfied(&s("alice")));
    }

    #[test]
    fn test_max_size_with_strings() {
        let rule = MaxSize::new(5);
        assert!(rule.is_satisfied(&s("hello")));
        assert!(!rule.is_satisfied(&s("hello world")));
    }

    #[test]
    fn test_exact_length() {
        let rule = Length::new(4);
        assert!(rule.is_satisfied(&s("test")));
        assert!(!rule.is_satisfied(&s("hi")));
        assert!(!rule.is_satisfied(&s("testing")));
    }

    #[test]
    fn test_size_with_arrays() {
        let tags = Value::Array(vec![s("tag1"), s("tag2")]);
        assert!(MinSize::new(2).is_satisfied(&tags));
        assert!(!MinSize::new(3).is_satisfied(&tags));
        assert!(MaxSize::new(2).is_satisfied(&tags));
        assert!(!MaxSize::new(1).is_satisfied(&tags));
        assert!(Length::new(2).is_satisfied(&tags));
    }

    #[test]
    fn test_size_counts_characters_not_bytes() {
        // 4 characters, more than 4 bytes
        let rule = MaxSize::new(4);
        assert!(rule.is_satisfied(&s("café")));
    }

    #[test]
    fn test_size_rejects_unsized_shapes() {
        assert!(!MinSize::new(0).is_satisfied(&Value::Null));
        assert!(!MinSize::new(0).is_satisfied(&Value::Bool(true)));
        assert!(!MaxSize::new(10).is_satisfied(&Value::Number(serde_json::Number::from(42))));
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(MinSize::new(2).default_message(), "Minimum size is 2");
        assert_eq!(MaxSize::new(8).default_message(), "Maximum size is 8");
        assert_eq!(Length::new(4).default_message(), "Required length is 4");
    }
}
