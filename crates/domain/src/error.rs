//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all template and
//! instance operations, enabling consistent error handling without forcing
//! callers to match on strings. Every variant carries a stable
//! machine-readable code (see [`DomainError::code`]) alongside its human
//! message.

use thiserror::Error;

/// Unified error type for template/instance operations.
///
/// Nothing in this taxonomy is retryable: every failure is a deterministic
/// function of its inputs and will recur identically on a retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller passed an argument of the wrong shape (e.g. a blank id).
    #[error("invalid input `{name}`: expected {expected}, got {actual}")]
    InvalidInput {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// Lookup of a template id that was never registered.
    #[error("template not found: {id}")]
    TemplateNotFound { id: String },

    /// Registration under an id that already exists. The registry is
    /// append-only, so this holds regardless of payload equality.
    #[error("template already registered: {id}")]
    DuplicateTemplate { id: String },

    /// Structural invariant violation on a template definition.
    ///
    /// `issues` is the full accumulated list found in one validation pass,
    /// never just the first problem.
    #[error("template `{template_id}` failed validation: {}", issues.join("; "))]
    TemplateValidation {
        template_id: String,
        issues: Vec<String>,
    },

    /// Semantic constraint violation on a customization payload.
    #[error("customizations for template `{template_id}` rejected: {}", issues.join("; "))]
    CustomizationValidation {
        template_id: String,
        issues: Vec<String>,
    },

    /// Lookup/delete/render of an unknown instance id.
    #[error("instance not found: {id}")]
    InstanceNotFound { id: String },

    /// Any failure during resolve/render, including a template that was
    /// removed after the instance referencing it was created.
    #[error("script generation failed for instance `{instance_id}`: {reason}")]
    ScriptGeneration {
        instance_id: String,
        reason: String,
    },
}

impl DomainError {
    /// Stable machine-readable code for this error.
    ///
    /// Codes never change across releases; messages may.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::TemplateNotFound { .. } => "TEMPLATE_NOT_FOUND",
            Self::DuplicateTemplate { .. } => "DUPLICATE_TEMPLATE",
            Self::TemplateValidation { .. } => "TEMPLATE_VALIDATION_FAILED",
            Self::CustomizationValidation { .. } => "CUSTOMIZATION_VALIDATION_FAILED",
            Self::InstanceNotFound { .. } => "INSTANCE_NOT_FOUND",
            Self::ScriptGeneration { .. } => "SCRIPT_GENERATION_FAILED",
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(
        name: &'static str,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            name,
            expected,
            actual: actual.into(),
        }
    }

    /// Create a template not found error.
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound { id: id.into() }
    }

    /// Create a duplicate template error.
    pub fn duplicate_template(id: impl Into<String>) -> Self {
        Self::DuplicateTemplate { id: id.into() }
    }

    /// Create a template validation error carrying the full issue list.
    pub fn template_validation(template_id: impl Into<String>, issues: Vec<String>) -> Self {
        Self::TemplateValidation {
            template_id: template_id.into(),
            issues,
        }
    }

    /// Create a customization validation error carrying the full issue list.
    pub fn customization_validation(template_id: impl Into<String>, issues: Vec<String>) -> Self {
        Self::CustomizationValidation {
            template_id: template_id.into(),
            issues,
        }
    }

    /// Create an instance not found error.
    pub fn instance_not_found(id: impl Into<String>) -> Self {
        Self::InstanceNotFound { id: id.into() }
    }

    /// Create a script generation error wrapping the root cause text.
    pub fn script_generation(instance_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ScriptGeneration {
            instance_id: instance_id.into(),
            reason: reason.into(),
        }
    }

    /// The accumulated issue list, for the two validation variants.
    pub fn issues(&self) -> Option<&[String]> {
        match self {
            Self::TemplateValidation { issues, .. }
            | Self::CustomizationValidation { issues, .. } => Some(issues),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            DomainError::invalid_input("id", "non-empty string", "empty string").code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            DomainError::template_not_found("x").code(),
            "TEMPLATE_NOT_FOUND"
        );
        assert_eq!(
            DomainError::duplicate_template("x").code(),
            "DUPLICATE_TEMPLATE"
        );
        assert_eq!(
            DomainError::template_validation("x", vec![]).code(),
            "TEMPLATE_VALIDATION_FAILED"
        );
        assert_eq!(
            DomainError::customization_validation("x", vec![]).code(),
            "CUSTOMIZATION_VALIDATION_FAILED"
        );
        assert_eq!(
            DomainError::instance_not_found("x").code(),
            "INSTANCE_NOT_FOUND"
        );
        assert_eq!(
            DomainError::script_generation("x", "boom").code(),
            "SCRIPT_GENERATION_FAILED"
        );
    }

    #[test]
    fn test_validation_message_joins_all_issues() {
        let err = DomainError::template_validation(
            "heist",
            vec!["first problem".into(), "second problem".into()],
        );
        let msg = err.to_string();
        assert!(msg.contains("first problem"));
        assert!(msg.contains("second problem"));
    }

    #[test]
    fn test_issues_accessor() {
        let err = DomainError::customization_validation("heist", vec!["bad".into()]);
        assert_eq!(err.issues(), Some(&["bad".to_string()][..]));
        assert_eq!(DomainError::template_not_found("x").issues(), None);
    }
}
