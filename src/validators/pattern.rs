//! Pattern-based validator using regular expressions

use crate::traits::Validator;
use regex::Regex;
use serde_json::Value;

/// Rule satisfied when a string value matches the regular expression.
///
/// Matching is substring-based; anchor the pattern with `^`/`$` to require a
/// full match. Non-string values are unsatisfied.
#[derive(Debug, Clone)]
pub struct Match {
    pub regex: Regex,
}

impl Match {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Validator for Match {
    fn is_satisfied(&self, value: &Value) -> bool {
        match value.as_str() {
            Some(text) => self.regex.is_match(text),
            None => false,
        }
    }

    fn default_message(&self) -> String {
        format!("Must match {}", self.regex)
    }

    fn rule_name(&self) -> &'static str {
        "match"
    }
}
