//! # fieldcheck
//!
//! A composable, type-safe validation engine for flat data records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let validator = record_validator()?;
//! let report = validator.validate(&record);
//! if !report.is_valid() {
//!     for failure in report.failures() {
//!         println!("{}: {}", failure.field, failure.message);
//!     }
//! }
//! ```
//!
//! ## Layers
//!
//! - [`foundation`] — the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`] — leaf checks: [`NotEmpty`](validators::NotEmpty),
//!   [`MaxLength`](validators::MaxLength), [`LengthRange`](validators::LengthRange),
//!   [`NotEqual`](validators::NotEqual), [`Email`](validators::Email),
//!   [`Complexity`](validators::Complexity), [`Checksum`](validators::Checksum)
//! - [`combinators`] — composition: [`And`](combinators::And),
//!   [`WithMessage`](combinators::WithMessage)
//! - [`rules`] — record-level rule objects and the
//!   [`RecordValidator`](rules::RecordValidator) engine
//! - [`record`] — the [`Record`](record::Record) data model and its
//!   canonical rule set
//!
//! Use the [`validator!`] macro for zero-boilerplate leaf validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the fundamental error type for all validators —
// boxing it would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validators;
