//! Built-in validators
//!
//! Leaf validators for string inputs, grouped by concern:
//!
//! - [`length`] — [`NotEmpty`], [`MaxLength`], [`LengthRange`]
//! - [`pattern`] — [`NotEqual`]
//! - [`content`] — [`Email`]
//! - [`password`] — [`Complexity`] and the [`is_complex`] predicate
//! - [`checksum`] — [`Checksum`] and the [`check_digits`] predicate
//!
//! Every validator has a lowercase factory function, e.g. [`not_empty()`],
//! [`max_length()`], [`email()`].

pub mod checksum;
pub mod content;
pub mod length;
pub mod password;
pub mod pattern;

pub use checksum::{Checksum, check_digits, checksum};
pub use content::{Email, email};
pub use length::{LengthRange, MaxLength, NotEmpty, length_range, max_length, not_empty};
pub use password::{Complexity, complexity, is_complex};
pub use pattern::{NotEqual, not_equal};
