//! Email format validator

use crate::traits::Validator;
use crate::validators::pattern::Match;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Anchored address pattern: dotted local part, dotted domain labels, and an
// alphabetic TLD of at least two characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Rule satisfied when a string value is a plausible email address.
///
/// A specialization of [`Match`] with a built-in pattern. Not a full RFC 5322
/// parser; it accepts the common shapes a signup form should accept.
#[derive(Debug, Clone)]
pub struct Email {
    matcher: Match,
}

impl Email {
    pub fn new() -> Self {
        Self {
            matcher: Match::new(EMAIL_PATTERN.clone()),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Email {
    fn is_satisfied(&self, value: &Value) -> bool {
        self.matcher.is_satisfied(value)
    }

    fn default_message(&self) -> String {
        "Must be a valid email address".to_string()
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
