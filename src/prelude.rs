//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in
//! all commonly needed traits, types, validators, and the rule engine.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let validator = record_validator()?;
//! let report = validator.validate(&record);
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, WithMessage, and, with_message};

// ============================================================================
// RULES: Rule objects, engine, and report
// ============================================================================

pub use crate::rules::{
    Failure, RecordValidator, RecordValidatorBuilder, Rule, RuleSetError, Step, ValidationReport,
};

// ============================================================================
// RECORD: Data model and canonical rule set
// ============================================================================

pub use crate::record::{Record, record_validator};
