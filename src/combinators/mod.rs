//! Combinators for composing validators
//!
//! Combinators wrap one or more validators to build larger validators:
//!
//! - [`And`] — both validators must pass (short-circuits on first failure)
//! - [`WithMessage`] — replaces the error message of a validator
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let account = not_empty()
//!     .and(not_equal("admin"))
//!     .and(max_length(20));
//! ```

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
