//! Overlay merge: project a base template plus instance overrides into a
//! fully resolved, template-shaped view.
//!
//! The merge is pure and total over validated inputs, and deliberately
//! asymmetric: record-shaped overrides merge field-by-field, list-shaped
//! overrides (participants, per-segment dialogue) replace wholesale.

use scenecast_domain::{ContentElement, InstanceOverrides, SegmentKey, Template};

/// Produce the resolved view of `template` under `overrides`.
///
/// The result is a deep copy; mutating it never affects the registered
/// template, so two instances of the same template cannot observe each
/// other's customizations.
pub fn resolve(template: &Template, overrides: &InstanceOverrides) -> Template {
    let mut resolved = template.clone();

    if let Some(challenge) = &overrides.challenge {
        let target = &mut resolved.challenge;
        if let Some(objective) = &challenge.objective {
            target.objective = objective.clone();
        }
        if let Some(target_objects) = &challenge.target_objects {
            target.target_objects = target_objects.clone();
        }
        if let Some(rules) = &challenge.rules {
            target.rules = rules.clone();
        }
        if let Some(success_condition) = &challenge.success_condition {
            target.success_condition = success_condition.clone();
        }
        if let Some(failure_consequence) = &challenge.failure_consequence {
            target.failure_consequence = failure_consequence.clone();
        }
    }

    if let Some(participants) = &overrides.participants {
        // Full substitution: the cast is validated as a complete set.
        resolved.participants = participants.clone();
    }

    if let Some(environment) = &overrides.environment {
        let target = &mut resolved.environment;
        if let Some(location) = &environment.location {
            target.location = location.clone();
        }
        if let Some(props) = &environment.props {
            target.props = props.clone();
        }
        if let Some(constraints) = &environment.constraints {
            target.constraints = constraints.clone();
        }
    }

    if let Some(dialogue) = &overrides.dialogue {
        for (key, lines) in dialogue {
            // Unknown keys were rejected at validation time; a merge stays
            // total by skipping them here.
            let Some(segment_key) = SegmentKey::parse(key) else {
                continue;
            };
            let segment = resolved.segments.get_mut(segment_key);
            // Splice the replacement where the original dialogue began so
            // action/visual cues keep their place in the timeline. Every
            // element before the first dialogue survives the retain, so the
            // original position stays valid as an insertion point.
            let insert_at = segment
                .content
                .iter()
                .position(|element| matches!(element, ContentElement::Dialogue(_)))
                .unwrap_or(segment.content.len());
            segment
                .content
                .retain(|element| !matches!(element, ContentElement::Dialogue(_)));
            segment.content.splice(
                insert_at..insert_at,
                lines.iter().cloned().map(ContentElement::Dialogue),
            );
        }
    }

    resolved
}
