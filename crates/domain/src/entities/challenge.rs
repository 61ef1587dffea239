//! Challenge entity - The objective participants compete over
//!
//! All fields are free text or string lists; the engine never interprets
//! them beyond rendering the objective into the script header.

use serde::{Deserialize, Serialize};

/// The challenge at the heart of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// What the players are trying to do.
    pub objective: String,
    /// Objects the objective revolves around.
    pub target_objects: Vec<String>,
    /// House rules in effect.
    pub rules: Vec<String>,
    /// What counts as winning.
    pub success_condition: String,
    /// What happens on failure.
    pub failure_consequence: String,
}

/// Partial challenge override: present fields replace the base template's
/// values field-by-field, absent fields keep them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_objects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_consequence: Option<String>,
}

impl ChallengeOverride {
    pub fn is_empty(&self) -> bool {
        self.objective.is_none()
            && self.target_objects.is_none()
            && self.rules.is_none()
            && self.success_condition.is_none()
            && self.failure_consequence.is_none()
    }
}
