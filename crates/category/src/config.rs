//! Field rules for categories
//!
//! [`CategoryRules`] holds the tunable limits and the rule chain for each
//! field. Both the entity and [`CategoryValidator`](crate::CategoryValidator)
//! go through it so the two never disagree.

use seedwork_validator::prelude::*;
use serde::{Deserialize, Serialize};

/// Default upper bound for `name`, in characters.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 255;

/// Limits applied when validating category fields.
///
/// Deserializes from partial input; missing keys take their defaults.
///
/// ```
/// use seedwork_category::CategoryRules;
///
/// let rules: CategoryRules = serde_json::from_str("{}").unwrap();
/// assert_eq!(rules, CategoryRules::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRules {
    /// Maximum number of characters in `name`
    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,
}

fn default_name_max_length() -> usize {
    DEFAULT_NAME_MAX_LENGTH
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

impl CategoryRules {
    /// Overrides the `name` length limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name_max_length(mut self, limit: usize) -> Self {
        self.name_max_length = limit;
        self
    }

    /// `name`: required, string, at most `name_max_length` characters.
    pub fn check_name<'r>(&self, name: &'r RuleValue) -> ValidationResult<&'r RuleValue> {
        name.required()?.string()?.max_length(self.name_max_length)
    }

    /// `description`: optional string.
    pub fn check_description<'r>(
        &self,
        description: &'r RuleValue,
    ) -> ValidationResult<&'r RuleValue> {
        description.string()
    }

    /// `is_active`: optional boolean.
    pub fn check_is_active<'r>(&self, is_active: &'r RuleValue) -> ValidationResult<&'r RuleValue> {
        is_active.boolean()
    }
}
