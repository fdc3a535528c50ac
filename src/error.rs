//! Validation error type

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed check, keyed for later lookup (typically a form field).
///
/// Errors are created by the [`Validation`](crate::Validation) context when a
/// rule is unsatisfied; the key identifies the call site that ran the check
/// until it is overridden via the chained result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable error message
    pub message: String,
    /// Lookup key correlating the error with an input field
    pub key: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: key.into(),
        }
    }
}
