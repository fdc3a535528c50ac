//! Validation context: dispatch, error accumulation and call-site keying

use std::collections::HashMap;
use std::panic::Location;

use regex::Regex;
use tracing::debug;

use crate::error::ValidationError;
use crate::traits::{ToValidationValue, Validator};
use crate::validators::{Email, Length, Match, Max, MaxSize, Min, MinSize, Range, Required};

/// Collects the outcomes of a validation session.
///
/// Create one per request or per object to validate, run checks through the
/// convenience methods, then inspect [`has_errors`](Validation::has_errors) /
/// [`error_map`](Validation::error_map). Not synchronized; a context belongs
/// to a single thread of control.
#[derive(Debug, Default, Clone)]
pub struct Validation {
    /// Accumulated failures, in insertion order
    pub errors: Vec<ValidationError>,
    keep: bool,
}

/// The outcome of a single check.
///
/// Carries success and, on failure, an exclusive handle to the error that was
/// just recorded in the context, so [`key`](ValidationResult::key) and
/// [`message`](ValidationResult::message) can override the defaults in place.
/// Both are no-ops when the check passed.
#[derive(Debug)]
pub struct ValidationResult<'a> {
    /// Whether the check was satisfied
    pub ok: bool,
    error: Option<&'a mut ValidationError>,
}

impl<'a> ValidationResult<'a> {
    fn passed() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// The recorded error; absent when the check passed
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_deref()
    }

    /// Override the error's lookup key, usually with a field name
    pub fn key(mut self, key: impl Into<String>) -> Self {
        if let Some(err) = self.error.as_deref_mut() {
            err.key = key.into();
        }
        self
    }

    /// Override the error's message. Callers format with `format!` as needed.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        if let Some(err) = self.error.as_deref_mut() {
            err.message = message.into();
        }
        self
    }
}

impl Validation {
    /// Create a new empty validation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal to a hosting framework that errors should survive a redirect.
    ///
    /// The flag is sticky and never read by the context itself.
    pub fn keep(&mut self) {
        self.keep = true;
    }

    /// Whether [`keep`](method@Validation::keep) was requested
    pub fn is_kept(&self) -> bool {
        self.keep
    }

    /// Drop all accumulated errors so the context can be reused
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Check if any validation has failed so far
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors mapped by key.
    ///
    /// If several errors share a key the first one inserted wins; typically
    /// the first validation is the more basic one.
    pub fn error_map(&self) -> HashMap<&str, &ValidationError> {
        let mut map = HashMap::new();
        for err in &self.errors {
            map.entry(err.key.as_str()).or_insert(err);
        }
        map
    }

    /// Record an error that has no underlying rule, e.g. a cross-field
    /// business check. The key starts empty; set it via
    /// [`ValidationResult::key`].
    pub fn error(&mut self, message: impl Into<String>) -> ValidationResult<'_> {
        self.errors.push(ValidationError::new(message, ""));
        ValidationResult {
            ok: false,
            error: self.errors.last_mut(),
        }
    }

    /// Test that the value is present and non-empty (if string or list)
    #[track_caller]
    pub fn required(&mut self, obj: impl ToValidationValue) -> ValidationResult<'_> {
        self.apply(&Required, obj)
    }

    /// Test that `n` is at least `min`
    #[track_caller]
    pub fn min(&mut self, n: i64, min: i64) -> ValidationResult<'_> {
        self.apply(&Min::new(min), n)
    }

    /// Test that `n` is at most `max`
    #[track_caller]
    pub fn max(&mut self, n: i64, max: i64) -> ValidationResult<'_> {
        self.apply(&Max::new(max), n)
    }

    /// Test that `n` lies in `min..=max`.
    ///
    /// The bounds are applied in sequence, so the failing bound reports its
    /// own default message.
    #[track_caller]
    pub fn range(&mut self, n: i64, min: i64, max: i64) -> ValidationResult<'_> {
        let location = Location::caller();
        let rule = Range::new(min, max);
        let value = n.to_validation_value();
        for bound in [&rule.min as &dyn Validator, &rule.max as &dyn Validator] {
            if !bound.is_satisfied(&value) {
                return self.fail(bound, location);
            }
        }
        ValidationResult::passed()
    }

    /// Test that the value holds at least `min` characters or elements
    #[track_caller]
    pub fn min_size(&mut self, obj: impl ToValidationValue, min: usize) -> ValidationResult<'_> {
        self.apply(&MinSize::new(min), obj)
    }

    /// Test that the value holds at most `max` characters or elements
    #[track_caller]
    pub fn max_size(&mut self, obj: impl ToValidationValue, max: usize) -> ValidationResult<'_> {
        self.apply(&MaxSize::new(max), obj)
    }

    /// Test that the value holds exactly `length` characters or elements
    #[track_caller]
    pub fn length(&mut self, obj: impl ToValidationValue, length: usize) -> ValidationResult<'_> {
        self.apply(&Length::new(length), obj)
    }

    /// Test that the string matches the regular expression
    #[track_caller]
    pub fn matches(&mut self, s: &str, regex: &Regex) -> ValidationResult<'_> {
        self.apply(&Match::new(regex.clone()), s)
    }

    /// Test that the string is a plausible email address
    #[track_caller]
    pub fn email(&mut self, s: &str) -> ValidationResult<'_> {
        self.apply(&Email::new(), s)
    }

    /// Run one rule against one value.
    ///
    /// On failure the error is appended to the context, keyed with the
    /// `file#line` of the call site that triggered the validation.
    #[track_caller]
    pub fn apply(&mut self, rule: &dyn Validator, obj: impl ToValidationValue) -> ValidationResult<'_> {
        let location = Location::caller();
        let value = obj.to_validation_value();
        if rule.is_satisfied(&value) {
            return ValidationResult::passed();
        }
        self.fail(rule, location)
    }

    /// Apply a group of rules to a value, in order, and return the result of
    /// the first one that fails, or of the last one if all succeed. Later
    /// rules are never evaluated once one fails. An empty group has no
    /// outcome and yields `None`.
    #[track_caller]
    pub fn check(
        &mut self,
        obj: impl ToValidationValue,
        rules: &[&dyn Validator],
    ) -> Option<ValidationResult<'_>> {
        let location = Location::caller();
        let value = obj.to_validation_value();
        if rules.is_empty() {
            return None;
        }
        for rule in rules {
            if !rule.is_satisfied(&value) {
                return Some(self.fail(*rule, location));
            }
        }
        Some(ValidationResult::passed())
    }

    fn fail(
        &mut self,
        rule: &dyn Validator,
        location: &'static Location<'static>,
    ) -> ValidationResult<'_> {
        let key = format!("{}#{}", location.file(), location.line());
        debug!(
            target: "fieldcheck",
            rule = rule.rule_name(),
            key = %key,
            "validation check failed"
        );
        self.errors.push(ValidationError::new(rule.default_message(), key));
        ValidationResult {
            ok: false,
            error: self.errors.last_mut(),
        }
    }
}
