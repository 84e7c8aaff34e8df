//! Error type for rule failures
//!
//! A [`ValidationFailure`] is produced by the first failing check in a rule
//! chain. It carries the fully formatted, human-readable message and nothing
//! else; callers compare on the message text.

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A single violated rule.
///
/// The message is already interpolated with the property name (and limit,
/// where the rule has one), e.g. `"The name is required"`.
///
/// # Examples
///
/// ```
/// use seedwork_validator::foundation::ValidationFailure;
///
/// let failure = ValidationFailure::new("The name is required");
/// assert_eq!(failure.message(), "The name is required");
/// assert_eq!(failure.to_string(), "The name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
}

impl ValidationFailure {
    /// Creates a failure from an already formatted message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `"The {prop} is required"`
    pub(crate) fn required(prop: &str) -> Self {
        Self::new(format!("The {prop} is required"))
    }

    /// `"The {prop} must be a string"`
    pub(crate) fn not_string(prop: &str) -> Self {
        Self::new(format!("The {prop} must be a string"))
    }

    /// `"The {prop} must be less than {limit} characters"`
    pub(crate) fn too_long(prop: &str, limit: usize) -> Self {
        Self::new(format!("The {prop} must be less than {limit} characters"))
    }

    /// `"The {prop} must be a boolean"`
    pub(crate) fn not_boolean(prop: &str) -> Self {
        Self::new(format!("The {prop} must be a boolean"))
    }

    /// The formatted message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_the_bare_message() {
        let failure = ValidationFailure::too_long("name", 255);
        assert_eq!(
            failure.to_string(),
            "The name must be less than 255 characters"
        );
        assert_eq!(failure.message(), failure.to_string());
    }

    #[test]
    fn constructors_interpolate_prop() {
        assert_eq!(
            ValidationFailure::required("field").into_message(),
            "The field is required"
        );
        assert_eq!(
            ValidationFailure::not_string("field").into_message(),
            "The field must be a string"
        );
        assert_eq!(
            ValidationFailure::not_boolean("is_active").into_message(),
            "The is_active must be a boolean"
        );
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ValidationFailure>();
    }
}
