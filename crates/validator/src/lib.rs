//! # seedwork-validator
//!
//! Fluent field-level validation rules for domain entities.
//!
//! ## Quick Start
//!
//! ```
//! use seedwork_validator::prelude::*;
//!
//! let name = RuleValue::values("t".repeat(5), "name");
//! assert!(name.required().and_then(|r| r.string()?.max_length(5)).is_ok());
//!
//! let missing = RuleValue::values(None::<String>, "name");
//! let err = missing.required().and_then(RuleValue::string).unwrap_err();
//! assert_eq!(err.message(), "The name is required");
//! ```
//!
//! ## Rules
//!
//! - [`required`](rules::RuleValue::required): rejects `null` and `""`
//! - [`string`](rules::RuleValue::string): present values must be strings
//! - [`max_length`](rules::RuleValue::max_length): character count upper bound
//! - [`boolean`](rules::RuleValue::boolean): present values must be `true`/`false`
//!
//! Whole-payload validators implement
//! [`ValidatorFields`](foundation::ValidatorFields) and collect failures per
//! property in an [`ErrorFields`](foundation::ErrorFields) map.

pub mod foundation;
pub mod prelude;
pub mod rules;
