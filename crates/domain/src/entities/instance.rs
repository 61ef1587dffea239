//! Instance entity - A template reference plus partial overrides
//!
//! An instance never copies its template: it holds the template's id (a
//! weak reference) and the raw, unmerged override payload. Merging into a
//! resolved view happens lazily at script-generation time. There is no
//! update operation; changing an instance means deleting and recreating it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::challenge::ChallengeOverride;
use super::environment::EnvironmentOverride;
use super::participant::Participant;
use super::segment::DialogueLine;
use crate::ids::InstanceId;

/// Partial override payload supplied at instance creation.
///
/// Merge semantics are deliberately asymmetric: record-shaped overrides
/// (challenge, environment) merge field-by-field, while list-shaped
/// overrides (participants, per-segment dialogue) replace wholesale.
/// List identity and ordering are meaningful; scalar fields are
/// independently overridable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<ChallengeOverride>,
    /// Full substitution of the cast; validated as a complete set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentOverride>,
    /// Per-segment dialogue replacement, keyed by segment name.
    ///
    /// Keys are caller-supplied strings; the validator rejects anything
    /// other than `intro`/`gameplay`/`conclusion`. A `BTreeMap` keeps
    /// iteration deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<BTreeMap<String, Vec<DialogueLine>>>,
}

impl InstanceOverrides {
    /// An override payload touching nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.challenge.is_none()
            && self.participants.is_none()
            && self.environment.is_none()
            && self.dialogue.is_none()
    }
}

/// A created instance owned by the instance store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: InstanceId,
    /// Weak reference to the registered template. If that template ever
    /// disappears from the registry, this instance dangles and script
    /// generation fails explicitly rather than using a stale copy.
    pub template_id: String,
    /// Raw overrides exactly as supplied, never pre-merged.
    pub overrides: InstanceOverrides,
    pub created_at: DateTime<Utc>,
}

impl Instance {
    /// Create an instance with a fresh id.
    pub fn new(template_id: impl Into<String>, overrides: InstanceOverrides) -> Self {
        Self {
            id: InstanceId::new(),
            template_id: template_id.into(),
            overrides,
            created_at: Utc::now(),
        }
    }
}
