//! Record-level rule engine
//!
//! This module layers declarative rules on top of the leaf validators:
//!
//! - [`Rule`] — a named rule over one record type (simple, cross-field, or
//!   contextual)
//! - [`Step`] — one validator plus its failure message, for simple rules
//! - [`RecordValidator`] — an ordered rule set, built once and reused
//! - [`ValidationReport`] / [`Failure`] — the ordered outcome of a pass
//! - [`RuleSetError`] — construction-time configuration errors

pub mod engine;
pub mod report;
pub mod rule;

pub use engine::{RecordValidator, RecordValidatorBuilder, RuleSetError};
pub use report::{Failure, ValidationReport};
pub use rule::{Rule, Step};
