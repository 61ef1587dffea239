//! Semantic validation of override payloads against a template.
//!
//! Like template validation, one pass accumulates every issue. Dialogue
//! overrides are checked for key names only; dialogue element shape is
//! already guaranteed by the payload types.

use crate::entities::{
    ChallengeOverride, EnvironmentOverride, InstanceOverrides, Participant, SegmentKey, Template,
};
use crate::error::DomainError;

use super::template::participant_set_issues;

/// Collect every violation of `overrides` against `template`.
pub fn customization_issues(template: &Template, overrides: &InstanceOverrides) -> Vec<String> {
    let mut issues = Vec::new();

    if let Some(participants) = &overrides.participants {
        participant_override_issues(template, participants, &mut issues);
    }
    if let Some(challenge) = &overrides.challenge {
        challenge_override_issues(challenge, &mut issues);
    }
    if let Some(environment) = &overrides.environment {
        environment_override_issues(environment, &mut issues);
    }
    if let Some(dialogue) = &overrides.dialogue {
        for key in dialogue.keys() {
            if SegmentKey::parse(key).is_none() {
                issues.push(format!(
                    "unknown segment key `{key}` in dialogue customizations \
                     (expected intro, gameplay, or conclusion)"
                ));
            }
        }
    }

    issues
}

/// Validate an override payload, failing with the full accumulated list.
pub fn validate_customizations(
    template: &Template,
    overrides: &InstanceOverrides,
) -> Result<(), DomainError> {
    let issues = customization_issues(template, overrides);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(DomainError::customization_validation(&template.id, issues))
    }
}

fn participant_override_issues(
    template: &Template,
    participants: &[Participant],
    issues: &mut Vec<String>,
) {
    let min = template.metadata.min_participants as usize;
    let max = template.metadata.max_participants as usize;
    let count = participants.len();
    if count < min || count > max {
        issues.push(format!(
            "participant count {count} is outside the allowed range {min}..={max}"
        ));
    }

    participant_set_issues(participants, Some("participant"), issues);
}

fn challenge_override_issues(challenge: &ChallengeOverride, issues: &mut Vec<String>) {
    require_present_non_blank(&challenge.objective, "challenge objective", issues);
    require_present_non_blank(
        &challenge.success_condition,
        "challenge successCondition",
        issues,
    );
    require_present_non_blank(
        &challenge.failure_consequence,
        "challenge failureConsequence",
        issues,
    );
}

fn environment_override_issues(environment: &EnvironmentOverride, issues: &mut Vec<String>) {
    require_present_non_blank(&environment.location, "environment location", issues);
}

/// A field present in an override must be non-empty after trimming;
/// an absent field is always fine (it keeps the base value).
fn require_present_non_blank(field: &Option<String>, name: &str, issues: &mut Vec<String>) {
    if let Some(value) = field {
        if value.trim().is_empty() {
            issues.push(format!("{name} must be non-empty when supplied"));
        }
    }
}
