//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`
//!
//! # Architecture
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! use fieldcheck::foundation::Validate;
//!
//! struct NotEmpty;
//!
//! impl Validate for NotEmpty {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Validators compose using combinators, with zero runtime overhead:
//!
//! ```rust,ignore
//! let validator = not_empty().and(max_length(20));
//! ```

// Module declarations
pub mod error;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ErrorParams, ValidationError};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
