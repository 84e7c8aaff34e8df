//! Prelude module for convenient imports.
//!
//! ```
//! use seedwork_validator::prelude::*;
//!
//! let field = RuleValue::values(true, "is_active");
//! assert!(field.boolean().is_ok());
//! ```

pub use crate::foundation::{
    ErrorFields, ValidationFailure, ValidationResult, ValidatorFields,
};
pub use crate::rules::RuleValue;
