//! Collecting validator for category input
//!
//! Unlike [`Category::create`](crate::Category::create), which stops at the
//! first invalid field, [`CategoryValidator`] runs every field's chain and
//! records one message per failing field.

use crate::config::CategoryRules;
use crate::entity::CategoryInput;
use seedwork_validator::prelude::*;

// ============================================================================
// ERROR
// ============================================================================

/// Every field failure found in one input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("entity validation failed for {} field(s)", .errors.len())]
pub struct EntityValidationError {
    errors: ErrorFields,
}

impl EntityValidationError {
    #[must_use]
    pub fn errors(&self) -> &ErrorFields {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> ErrorFields {
        self.errors
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// [`ValidatorFields`] implementation for [`CategoryInput`].
///
/// ```
/// use seedwork_category::{CategoryInput, CategoryValidator};
/// use seedwork_validator::foundation::ValidatorFields;
///
/// let mut validator = CategoryValidator::default();
/// validator.validate(&CategoryInput::new("").with_is_active(5));
///
/// let errors = validator.errors().unwrap();
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains("name"));
/// assert!(errors.contains("is_active"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CategoryValidator {
    rules: CategoryRules,
    errors: Option<ErrorFields>,
}

impl CategoryValidator {
    #[must_use]
    pub fn new(rules: CategoryRules) -> Self {
        Self {
            rules,
            errors: None,
        }
    }

    /// Validates `input` with default rules, failing with all collected errors.
    pub fn check(input: &CategoryInput) -> Result<(), EntityValidationError> {
        let mut validator = Self::default();
        validator.validate(input);
        validator.into_result()
    }

    /// Converts the last run into a result.
    ///
    /// A validator that never ran has nothing to report and yields `Ok`.
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(EntityValidationError { errors }),
            _ => Ok(()),
        }
    }
}

impl ValidatorFields for CategoryValidator {
    type Input = CategoryInput;

    fn validate(&mut self, data: &Self::Input) {
        let rules = &self.rules;
        let mut errors = ErrorFields::new();

        errors.check(&RuleValue::values(data.name.clone(), "name"), |r| {
            rules.check_name(r)
        });
        errors.check(
            &RuleValue::values(data.description.clone(), "description"),
            |r| rules.check_description(r),
        );
        errors.check(&RuleValue::values(data.is_active.clone(), "is_active"), |r| {
            rules.check_is_active(r)
        });

        tracing::trace!(failed = errors.len(), "category input validated");
        self.errors = Some(errors);
    }

    fn errors(&self) -> Option<&ErrorFields> {
        self.errors.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn errors_absent_before_first_run() {
        let validator = CategoryValidator::default();
        assert!(validator.errors().is_none());
        assert!(!validator.is_valid());
    }

    #[test]
    fn valid_input_leaves_empty_errors() {
        let mut validator = CategoryValidator::default();
        validator.validate(&CategoryInput::new("Movie").with_description(""));
        assert_eq!(validator.errors(), Some(&ErrorFields::new()));
        assert!(validator.is_valid());
    }

    #[test]
    fn rerun_replaces_previous_errors() {
        let mut validator = CategoryValidator::default();
        validator.validate(&CategoryInput::new(5));
        assert!(!validator.is_valid());

        validator.validate(&CategoryInput::new("Movie"));
        assert!(validator.is_valid());
    }

    #[test]
    fn one_message_per_failing_field() {
        let err = CategoryValidator::check(&CategoryInput::default()).unwrap_err();
        assert_eq!(
            err.errors().get("name"),
            Some(&["The name is required".to_owned()][..])
        );
        assert_eq!(err.to_string(), "entity validation failed for 1 field(s)");
    }

    #[test]
    fn custom_rules_apply() {
        let mut validator = CategoryValidator::new(CategoryRules::default().with_name_max_length(2));
        validator.validate(&CategoryInput::new("Movie"));
        assert_eq!(
            validator.errors().and_then(|e| e.get("name")),
            Some(&["The name must be less than 2 characters".to_owned()][..])
        );
    }
}
