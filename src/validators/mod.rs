//! Built-in validation rules

pub mod email;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;

pub use email::Email;
pub use length::{Length, MaxSize, MinSize};
pub use numeric::{Max, Min, Range};
pub use pattern::Match;
pub use required::Required;
