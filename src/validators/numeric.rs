//! Numeric bound validators

use crate::traits::Validator;
use serde_json::Value;

/// Extract a numeric value from a JSON value.
///
/// Accepts JSON numbers and numeric strings; anything else (or a non-finite
/// parse result) yields `None` and the bound rules treat it as unsatisfied.
fn numeric_value(value: &Value) -> Option<f64> {
    let num = match value {
        Value::Number(num) => num.as_f64()?,
        Value::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    num.is_finite().then_some(num)
}

/// Rule satisfied when a numeric value is at least `min` (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct Min {
    pub min: i64,
}

impl Min {
    pub fn new(min: i64) -> Self {
        Self { min }
    }
}

impl Validator for Min {
    fn is_satisfied(&self, value: &Value) -> bool {
        match numeric_value(value) {
            Some(num) => num >= self.min as f64,
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Minimum is {}", self.min)
    }

    fn rule_name(&self) -> &'static str {
        "min"
    }
}

/// Rule satisfied when a numeric value is at most `max` (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct Max {
    pub max: i64,
}

impl Max {
    pub fn new(max: i64) -> Self {
        Self { max }
    }
}

impl Validator for Max {
    fn is_satisfied(&self, value: &Value) -> bool {
        match numeric_value(value) {
            Some(num) => num <= self.max as f64,
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Maximum is {}", self.max)
    }

    fn rule_name(&self) -> &'static str {
        "max"
    }
}

/// Composite of a [`Min`] and a [`Max`] bound.
///
/// [`Validation::range`](crate::Validation::range) applies the two bounds as
/// a short-circuit cascade, so the failing bound reports its own default
/// message. Applied as a single rule it is satisfied only when both bounds
/// are, and its own message names the full range.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub min: Min,
    pub max: Max,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Min::new(min),
            max: Max::new(max),
        }
    }
}

impl Validator for Range {
    fn is_satisfied(&self, value: &Value) -> bool {
        self.min.is_satisfied(value) && self.max.is_satisfied(value)
    }

    fn default_message(&self) -> String {
        format!("Range is {} to {}", self.min.min, self.max.max)
    }

    fn rule_name(&self) -> &'static str {
        "range"
    }
}
