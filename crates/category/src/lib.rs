//! # seedwork-category
//!
//! The `Category` entity and its validators.
//!
//! Entity constructors run one rule chain per field and return the first
//! [`ValidationFailure`](seedwork_validator::foundation::ValidationFailure)
//! unchanged. [`CategoryValidator`] checks every field and collects the
//! failures instead.
//!
//! ```
//! use seedwork_category::{Category, CategoryInput};
//!
//! let category = Category::create(CategoryInput::new("Movie")).unwrap();
//! assert!(category.is_active());
//!
//! let err = Category::create(CategoryInput::new(5)).unwrap_err();
//! assert_eq!(err.message(), "The name must be a string");
//! ```

pub mod config;
pub mod entity;
pub mod validator;

pub use config::CategoryRules;
pub use entity::{Category, CategoryInput};
pub use validator::{CategoryValidator, EntityValidationError};
