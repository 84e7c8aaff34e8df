//! Core validation types and traits
//!
//! - **Errors**: [`ValidationFailure`]
//! - **Contract**: [`ValidatorFields`], [`ErrorFields`]
//!
//! Rule checks return [`ValidationResult`], so a chain of checks is an
//! ordinary `?` sequence that stops at the first failure.

pub mod error;
pub mod fields;

pub use error::ValidationFailure;
pub use fields::{ErrorFields, ValidatorFields};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a single rule check.
pub type ValidationResult<T> = Result<T, ValidationFailure>;
