//! Core validation traits

use serde_json::Value;

/// Contract implemented by every validation rule.
///
/// Rules are stateless predicates: they judge a single value as satisfied or
/// not and carry a fixed default message used when the caller does not
/// override it. Rules never mutate anything and never fail; input of an
/// unexpected shape is simply unsatisfied.
pub trait Validator {
    /// Judge the value against this rule
    fn is_satisfied(&self, value: &Value) -> bool;

    /// Message reported when the rule is unsatisfied and no override is given
    fn default_message(&self) -> String;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;
}

/// Trait for types that can be converted to a validation value
pub trait ToValidationValue {
    fn to_validation_value(&self) -> Value;
}

impl ToValidationValue for String {
    fn to_validation_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValidationValue for &str {
    fn to_validation_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValidationValue for i32 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from(*self))
    }
}

impl ToValidationValue for i64 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from(*self))
    }
}

impl ToValidationValue for f64 {
    fn to_validation_value(&self) -> Value {
        Value::Number(serde_json::Number::from_f64(*self).unwrap_or(serde_json::Number::from(0)))
    }
}

impl ToValidationValue for bool {
    fn to_validation_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValidationValue for Value {
    fn to_validation_value(&self) -> Value {
        self.clone()
    }
}

impl<T> ToValidationValue for Option<T>
where
    T: ToValidationValue,
{
    fn to_validation_value(&self) -> Value {
        match self {
            Some(value) => value.to_validation_value(),
            None => Value::Null,
        }
    }
}

impl<T> ToValidationValue for Vec<T>
where
    T: ToValidationValue,
{
    fn to_validation_value(&self) -> Value {
        let values: Vec<Value> = self.iter()
            .map(|item| item.to_validation_value())
            .collect();
        Value::Array(values)
    }
}
