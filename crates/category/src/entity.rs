//! Category entity
//!
//! Raw input arrives as [`CategoryInput`], untyped JSON values per field. The
//! entity accepts it only after every field passed its rule chain, so a
//! [`Category`] always holds a non-empty name within the configured length.

use crate::config::CategoryRules;
use chrono::{DateTime, Utc};
use seedwork_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// INPUT
// ============================================================================

/// Unvalidated category fields.
///
/// Missing keys deserialize to `null`.
///
/// ```
/// use seedwork_category::CategoryInput;
///
/// let input: CategoryInput = serde_json::from_str(r#"{"name": "Movie"}"#).unwrap();
/// assert_eq!(input, CategoryInput::new("Movie"));
/// assert!(input.description.is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: Value,
    pub description: Value,
    pub is_active: Value,
}

impl CategoryInput {
    /// Input with only a name set.
    pub fn new(name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_is_active(mut self, is_active: impl Into<Value>) -> Self {
        self.is_active = is_active.into();
        self
    }
}


// ============================================================================
// ENTITY
// ============================================================================

/// A validated category.
///
/// The entity keeps the [`CategoryRules`] it was created with and applies
/// them again on [`update`](Self::update). Rules are not serialized; a
/// deserialized category is checked against, and keeps, the default rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    rules: CategoryRules,
}

/// Serialized shape of a [`Category`], validated before it becomes one.
#[derive(Deserialize)]
struct CategoryRecord {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = ValidationFailure;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let rules = CategoryRules::default();
        rules.check_name(&RuleValue::values(record.name.as_str(), "name"))?;
        rules.check_description(&RuleValue::values(
            record.description.as_deref(),
            "description",
        ))?;

        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
            created_at: record.created_at,
            rules,
        })
    }
}

impl Category {
    /// Validates `input` with the default [`CategoryRules`] and builds the entity.
    pub fn create(input: CategoryInput) -> ValidationResult<Self> {
        Self::create_with(input, &CategoryRules::default())
    }

    /// Validates `input` against `rules` and builds the entity.
    ///
    /// Fields are checked in order `name`, `description`, `is_active`; the
    /// first failure is returned as is. `is_active` defaults to `true` when
    /// absent.
    pub fn create_with(input: CategoryInput, rules: &CategoryRules) -> ValidationResult<Self> {
        let name = RuleValue::values(input.name, "name");
        let description = RuleValue::values(input.description, "description");
        let is_active = RuleValue::values(input.is_active, "is_active");

        rules.check_name(&name)?;
        rules.check_description(&description)?;
        rules.check_is_active(&is_active)?;

        let category = Self {
            id: Uuid::new_v4(),
            name: text(&name).unwrap_or_default(),
            description: text(&description),
            is_active: is_active.value().as_bool().unwrap_or(true),
            created_at: Utc::now(),
            rules: *rules,
        };
        tracing::debug!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Replaces name and description after validating both against the
    /// rules the entity was created with.
    ///
    /// On failure the entity is left unchanged.
    pub fn update(
        &mut self,
        name: impl Into<Value>,
        description: impl Into<Value>,
    ) -> ValidationResult<()> {
        let name = RuleValue::values(name, "name");
        let description = RuleValue::values(description, "description");

        self.rules.check_name(&name)?;
        self.rules.check_description(&description)?;

        self.name = text(&name).unwrap_or_default();
        self.description = text(&description);
        tracing::debug!(id = %self.id, name = %self.name, "category updated");
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rules applied by [`update`](Self::update).
    #[must_use]
    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }
}

/// String content of a checked value; `None` when absent.
fn text(field: &RuleValue) -> Option<String> {
    field.value().as_str().map(str::to_owned)
}
