//! # fieldcheck
//!
//! Ad hoc field validation with keyed error accumulation. There is no
//! schema and no derive: checks run directly against values as code
//! executes, and every failure lands in a [`Validation`] context, keyed by
//! the call site that produced it until a field name is chained on.
//!
//! ```
//! use fieldcheck::Validation;
//!
//! let mut v = Validation::new();
//! v.required("").key("name");
//! v.email("not-an-email").key("email");
//! v.range(7, 1, 5).key("rating").message("Rate between 1 and 5");
//!
//! assert!(v.has_errors());
//! assert_eq!(v.error_map()["name"].message, "Required");
//! ```

pub mod context;
pub mod error;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use context::{Validation, ValidationResult};
pub use error::ValidationError;
pub use traits::{ToValidationValue, Validator};

// Built-in validators
pub use validators::{Email, Length, Match, Max, MaxSize, Min, MinSize, Range, Required};
