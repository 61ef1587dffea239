//! Structural template validation.
//!
//! One pass accumulates every violation found; nothing short-circuits, so
//! a caller fixing issues sees the full list up front.

use url::Url;

use crate::entities::{Participant, Template};
use crate::error::DomainError;

/// Allowed drift between the sum of segment durations and the metadata
/// total duration, in seconds.
pub const SEGMENT_TOLERANCE_SECS: u64 = 2;

/// Collect every structural violation in `template`.
///
/// An empty result means the template is well-formed.
pub fn template_issues(template: &Template) -> Vec<String> {
    let mut issues = Vec::new();

    if template.id.trim().is_empty() {
        issues.push("template id must be a non-empty string".to_string());
    }
    if template.name.trim().is_empty() {
        issues.push("template name must be a non-empty string".to_string());
    }
    if template.description.trim().is_empty() {
        issues.push("template description must be a non-empty string".to_string());
    }

    metadata_issues(template, &mut issues);
    participant_set_issues(&template.participants, None, &mut issues);
    segment_issues(template, &mut issues);

    issues
}

/// Validate a template, failing with the full accumulated issue list.
pub fn validate_template(template: &Template) -> Result<(), DomainError> {
    let issues = template_issues(template);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(DomainError::template_validation(&template.id, issues))
    }
}

fn metadata_issues(template: &Template, issues: &mut Vec<String>) {
    let metadata = &template.metadata;

    if let Err(e) = Url::parse(&metadata.source_reference) {
        issues.push(format!(
            "metadata sourceReference `{}` is not a valid URL: {e}",
            metadata.source_reference
        ));
    }
    if metadata.total_duration_secs == 0 {
        issues.push("metadata totalDurationSecs must be positive".to_string());
    }
    if metadata.min_participants == 0 {
        issues.push("metadata minParticipants must be at least 1".to_string());
    }
    if metadata.max_participants < metadata.min_participants {
        issues.push(format!(
            "metadata maxParticipants ({}) must be >= minParticipants ({})",
            metadata.max_participants, metadata.min_participants
        ));
    }
}

fn segment_issues(template: &Template, issues: &mut Vec<String>) {
    for (key, segment) in template.segments.iter() {
        if segment.duration_secs == 0 {
            issues.push(format!("segment `{key}` must have a positive duration"));
        }
    }

    let segment_total = template.segments.total_duration_secs();
    let metadata_total = u64::from(template.metadata.total_duration_secs);
    let drift = segment_total.abs_diff(metadata_total);
    if drift > SEGMENT_TOLERANCE_SECS {
        issues.push(format!(
            "segment durations sum to {segment_total}s but metadata totalDurationSecs is \
             {metadata_total}s (tolerance {SEGMENT_TOLERANCE_SECS}s)"
        ));
    }
}

/// Validate a complete participant set: individual members, unique ids,
/// exactly one gamemaster. Shared between template validation and
/// participant-override validation.
///
/// `position_prefix` controls whether per-member issues are prefixed with
/// their list position (override payloads want this, templates do not).
pub(crate) fn participant_set_issues(
    participants: &[Participant],
    position_prefix: Option<&str>,
    issues: &mut Vec<String>,
) {
    if participants.is_empty() {
        issues.push("participant list must not be empty".to_string());
        return;
    }

    let gamemasters = participants.iter().filter(|p| p.is_gamemaster()).count();
    if gamemasters != 1 {
        issues.push(format!(
            "exactly one participant must have the gamemaster role, found {gamemasters}"
        ));
    }

    let mut seen_ids = std::collections::HashSet::new();
    for (index, participant) in participants.iter().enumerate() {
        let mut member_issues = Vec::new();
        if participant.id.trim().is_empty() {
            member_issues.push("id must be a non-empty string".to_string());
        } else if !seen_ids.insert(participant.id.as_str()) {
            member_issues.push(format!("duplicate participant id `{}`", participant.id));
        }
        if participant.name.trim().is_empty() {
            member_issues.push("name must be a non-empty string".to_string());
        }

        for issue in member_issues {
            match position_prefix {
                Some(noun) => issues.push(format!("{noun} {index}: {issue}")),
                None => issues.push(issue),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::sample_template;

    #[test]
    fn test_well_formed_template_has_no_issues() {
        assert_eq!(template_issues(&sample_template()), Vec::<String>::new());
        assert!(validate_template(&sample_template()).is_ok());
    }

    #[test]
    fn test_blank_identity_fields_reported_together() {
        let mut template = sample_template();
        template.id = " ".to_string();
        template.name = String::new();
        template.description = String::new();

        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("template id")));
        assert!(issues.iter().any(|i| i.contains("template name")));
        assert!(issues.iter().any(|i| i.contains("template description")));
    }

    #[test]
    fn test_invalid_source_reference_url() {
        let mut template = sample_template();
        template.metadata.source_reference = "not a url".to_string();
        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("sourceReference")));
    }

    #[test]
    fn test_participant_bounds_metadata() {
        let mut template = sample_template();
        template.metadata.min_participants = 0;
        template.metadata.max_participants = 0;
        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("minParticipants")));
        // min 0 / max 0 satisfies max >= min, so no bound-order issue
        assert!(!issues.iter().any(|i| i.contains("maxParticipants")));

        template.metadata.min_participants = 5;
        template.metadata.max_participants = 3;
        let issues = template_issues(&template);
        assert!(issues
            .iter()
            .any(|i| i.contains("maxParticipants (3) must be >= minParticipants (5)")));
    }

    #[test]
    fn test_gamemaster_count_enforced() {
        let mut template = sample_template();
        for participant in &mut template.participants {
            participant.role = crate::Role::Player;
        }
        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("found 0")));

        for participant in &mut template.participants {
            participant.role = crate::Role::Gamemaster;
        }
        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("found 3")));
    }

    #[test]
    fn test_empty_participant_list() {
        let mut template = sample_template();
        template.participants.clear();
        let issues = template_issues(&template);
        assert!(issues.iter().any(|i| i.contains("must not be empty")));
    }

    #[test]
    fn test_duplicate_participant_ids() {
        let mut template = sample_template();
        template.participants[2].id = template.participants[1].id.clone();
        let issues = template_issues(&template);
        assert!(issues
            .iter()
            .any(|i| i.contains("duplicate participant id")));
    }

    #[test]
    fn test_duration_drift_tolerance() {
        // Base is 3 + 27 + 5 = 35s against a 35s total.
        let mut template = sample_template();
        template.metadata.total_duration_secs = 37;
        assert!(validate_template(&template).is_ok(), "2s drift is allowed");

        template.metadata.total_duration_secs = 38;
        let err = validate_template(&template).expect_err("3s drift rejected");
        assert_eq!(err.code(), "TEMPLATE_VALIDATION_FAILED");
        let issues = err.issues().expect("carries issues");
        assert!(issues.iter().any(|i| i.contains("tolerance")));
    }

    #[test]
    fn test_zero_duration_segment() {
        let mut template = sample_template();
        template.segments.gameplay.duration_secs = 0;
        let issues = template_issues(&template);
        assert!(issues
            .iter()
            .any(|i| i.contains("segment `gameplay` must have a positive duration")));
    }

    #[test]
    fn test_all_issues_accumulate_in_one_pass() {
        let mut template = sample_template();
        template.name = String::new();
        template.metadata.min_participants = 0;
        template.participants[0].role = crate::Role::Player;
        template.segments.intro.duration_secs = 0;

        let err = validate_template(&template).expect_err("invalid");
        let issues = err.issues().expect("carries issues");
        assert!(issues.len() >= 4, "expected every violation, got {issues:?}");
    }
}
