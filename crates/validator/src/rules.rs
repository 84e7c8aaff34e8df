//! Fluent per-property rules
//!
//! A [`RuleValue`] pairs a raw value with the property name used in failure
//! messages. Each check borrows the holder and hands the same instance back on
//! success, so checks chain with `?`:
//!
//! ```
//! use seedwork_validator::prelude::*;
//!
//! fn check_name(name: &str) -> Result<(), ValidationFailure> {
//!     RuleValue::values(name, "name")
//!         .required()?
//!         .string()?
//!         .max_length(255)?;
//!     Ok(())
//! }
//!
//! assert!(check_name("Movie").is_ok());
//! assert_eq!(check_name("").unwrap_err().message(), "The name is required");
//! ```
//!
//! Evaluation stops at the first failing check. `Null` counts as absent:
//! only [`required`](RuleValue::required) rejects it, every other check
//! lets it through.

use crate::foundation::{ValidationFailure, ValidationResult};
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// RULE VALUE
// ============================================================================

/// An immutable (value, property) pair exposing chainable checks.
///
/// # Examples
///
/// ```
/// use seedwork_validator::rules::RuleValue;
///
/// let field = RuleValue::values("test", "field");
/// assert_eq!(field.value(), "test");
/// assert_eq!(field.prop(), "field");
///
/// // Checks return the holder itself on success.
/// assert!(std::ptr::eq(field.required().unwrap(), &field));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleValue {
    value: Value,
    prop: Cow<'static, str>,
}

impl RuleValue {
    /// Wraps `value` for checking under the display name `prop`.
    ///
    /// `None` converts to `Null`; nothing is checked yet.
    pub fn new(value: impl Into<Value>, prop: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value: value.into(),
            prop: prop.into(),
        }
    }

    /// Same as [`RuleValue::new`].
    pub fn values(value: impl Into<Value>, prop: impl Into<Cow<'static, str>>) -> Self {
        Self::new(value, prop)
    }

    /// The raw value under check.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The property name used in messages.
    #[must_use]
    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// Fails on `Null` and on the empty string.
    ///
    /// `0` and `false` are present values and pass.
    pub fn required(&self) -> ValidationResult<&Self> {
        match &self.value {
            Value::Null => Err(self.fail("required", ValidationFailure::required)),
            Value::String(s) if s.is_empty() => {
                Err(self.fail("required", ValidationFailure::required))
            }
            _ => Ok(self),
        }
    }

    /// Fails on any present value that is not a string.
    pub fn string(&self) -> ValidationResult<&Self> {
        match &self.value {
            Value::Null | Value::String(_) => Ok(self),
            _ => Err(self.fail("string", ValidationFailure::not_string)),
        }
    }

    /// Fails on strings longer than `limit` characters.
    ///
    /// Length counts Unicode scalar values, not bytes. A present value that
    /// is not a string has no length and fails as [`string`](Self::string)
    /// would.
    pub fn max_length(&self, limit: usize) -> ValidationResult<&Self> {
        match &self.value {
            Value::Null => Ok(self),
            Value::String(s) if s.chars().count() > limit => {
                Err(self.fail("max_length", |prop| {
                    ValidationFailure::too_long(prop, limit)
                }))
            }
            Value::String(_) => Ok(self),
            _ => Err(self.fail("max_length", ValidationFailure::not_string)),
        }
    }

    /// Fails on any present value other than `true` or `false`.
    pub fn boolean(&self) -> ValidationResult<&Self> {
        match &self.value {
            Value::Null | Value::Bool(_) => Ok(self),
            _ => Err(self.fail("boolean", ValidationFailure::not_boolean)),
        }
    }

    fn fail(
        &self,
        rule: &'static str,
        build: impl FnOnce(&str) -> ValidationFailure,
    ) -> ValidationFailure {
        tracing::debug!(prop = %self.prop, rule, "validation rule failed");
        build(&self.prop)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn message(result: ValidationResult<&RuleValue>) -> String {
        result.unwrap_err().into_message()
    }

    #[test]
    fn values_keeps_value_and_prop() {
        let field = RuleValue::values("test", "field");
        assert_eq!(field.value(), &json!("test"));
        assert_eq!(field.prop(), "field");
        assert_eq!(field, RuleValue::new("test", "field"));
    }

    #[test]
    fn none_becomes_null() {
        let field = RuleValue::values(None::<i32>, "field");
        assert!(field.value().is_null());
    }

    #[test]
    fn owned_prop_names_are_accepted() {
        let prop = format!("{}_{}", "is", "active");
        let field = RuleValue::values(true, prop);
        assert_eq!(field.prop(), "is_active");
    }

    #[test]
    fn required_keeps_falsy_values() {
        assert!(RuleValue::values(0, "field").required().is_ok());
        assert!(RuleValue::values(false, "field").required().is_ok());
        assert!(RuleValue::values(json!([]), "field").required().is_ok());
    }

    #[test]
    fn required_rejects_null_and_empty_string() {
        assert_eq!(
            message(RuleValue::values(Value::Null, "field").required()),
            "The field is required"
        );
        assert_eq!(
            message(RuleValue::values("", "field").required()),
            "The field is required"
        );
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(RuleValue::values(" ", "field").required().is_ok());
    }

    #[test]
    fn max_length_counts_chars() {
        // 5 chars, 10 bytes
        let field = RuleValue::values("ééééé", "field");
        assert!(field.max_length(5).is_ok());
        assert_eq!(
            message(field.max_length(4)),
            "The field must be less than 4 characters"
        );
    }

    #[test]
    fn max_length_guards_non_strings() {
        assert_eq!(
            message(RuleValue::values(12_345, "field").max_length(2)),
            "The field must be a string"
        );
        assert_eq!(
            message(RuleValue::values(json!(["a"]), "field").max_length(10)),
            "The field must be a string"
        );
    }

    #[test]
    fn boolean_does_not_coerce() {
        for value in [json!(0), json!(1), json!("true"), json!(""), json!({})] {
            assert_eq!(
                message(RuleValue::values(value, "field").boolean()),
                "The field must be a boolean"
            );
        }
    }

    #[test]
    fn checks_return_the_same_instance() {
        let field = RuleValue::values("t".repeat(5), "field");
        let chained = field
            .required()
            .and_then(RuleValue::string)
            .and_then(|r| r.max_length(5))
            .unwrap();
        assert!(std::ptr::eq(chained, &field));
    }

    #[test]
    fn rule_value_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleValue>();
    }
}
