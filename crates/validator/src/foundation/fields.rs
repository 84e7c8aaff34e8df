//! Contract for composite validators
//!
//! [`RuleValue`](crate::rules::RuleValue) stops at the first failure for a
//! single property. Validators that check a whole payload implement
//! [`ValidatorFields`] and collect each property's failure into an
//! [`ErrorFields`] map instead of returning on the first one.

use crate::foundation::ValidationFailure;
use crate::rules::RuleValue;
use indexmap::IndexMap;

// ============================================================================
// ERROR FIELDS
// ============================================================================

/// Failure messages grouped by property name.
///
/// Properties keep the order in which they first failed; messages for a
/// property keep the order in which they were recorded. Serializes as a JSON
/// object of string arrays (`{"name": ["The name is required"]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ErrorFields {
    fields: IndexMap<String, Vec<String>>,
}

impl ErrorFields {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message under `prop`.
    pub fn add(&mut self, prop: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(prop.into())
            .or_default()
            .push(message.into());
    }

    /// Appends a failure's message under `prop`.
    pub fn record(&mut self, prop: impl Into<String>, failure: ValidationFailure) {
        self.add(prop, failure.into_message());
    }

    /// Runs a rule chain and records its failure under the holder's property.
    ///
    /// Returns `true` when the chain passed.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedwork_validator::prelude::*;
    ///
    /// let mut errors = ErrorFields::new();
    /// let name = RuleValue::values(None::<String>, "name");
    /// let passed = errors.check(&name, |r| r.required()?.string());
    ///
    /// assert!(!passed);
    /// assert_eq!(errors.get("name"), Some(&["The name is required".to_owned()][..]));
    /// ```
    pub fn check<'r, F>(&mut self, field: &'r RuleValue, chain: F) -> bool
    where
        F: FnOnce(&'r RuleValue) -> Result<&'r RuleValue, ValidationFailure>,
    {
        match chain(field) {
            Ok(_) => true,
            Err(failure) => {
                tracing::trace!(prop = %field.prop(), "recording field failure");
                self.record(field.prop(), failure);
                false
            }
        }
    }

    /// Messages recorded for `prop`, if any.
    #[must_use]
    pub fn get(&self, prop: &str) -> Option<&[String]> {
        self.fields.get(prop).map(Vec::as_slice)
    }

    /// Returns `true` if `prop` has at least one message.
    #[must_use]
    pub fn contains(&self, prop: &str) -> bool {
        self.fields.contains_key(prop)
    }

    /// Number of properties with messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates properties and their messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(prop, messages)| (prop.as_str(), messages.as_slice()))
    }
}

// ============================================================================
// VALIDATOR CONTRACT
// ============================================================================

/// A validator over a whole input that collects per-property failures.
///
/// Implementers own their error state: [`errors`](Self::errors) returns
/// `None` until [`validate`](Self::validate) has run, and the collected map
/// afterwards (empty when everything passed).
///
/// Leaving out `validate` is a compile error:
///
/// ```compile_fail
/// use seedwork_validator::foundation::{ErrorFields, ValidatorFields};
///
/// struct Incomplete;
///
/// impl ValidatorFields for Incomplete {
///     type Input = str;
///
///     fn errors(&self) -> Option<&ErrorFields> {
///         None
///     }
/// }
/// ```
pub trait ValidatorFields {
    /// The payload being validated.
    type Input: ?Sized;

    /// Validates `data`, replacing any previously collected errors.
    fn validate(&mut self, data: &Self::Input);

    /// Errors collected by the last [`validate`](Self::validate) run.
    fn errors(&self) -> Option<&ErrorFields>;

    /// Returns `true` if a validation ran and recorded nothing.
    fn is_valid(&self) -> bool {
        self.errors().is_some_and(ErrorFields::is_empty)
    }
}
